use super::*;

const FIRST: &str = "（第一作者）";
const CORRESPONDING: &str = "（通訊作者）";

/// Parses one of the fixture manuscripts shipped with the integration tests.
fn fixture(name: &str) -> Document {
  let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name);
  Document::parse(&std::fs::read(path).unwrap()).unwrap()
}

/// Wraps contributor markup in a minimal article.
fn article(contribs: &str, affs: &str) -> Document {
  let xml = format!(
    r#"<article><front><article-meta>
         <title-group><article-title>Test article</article-title></title-group>
         <contrib-group>{contribs}</contrib-group>
         {affs}
       </article-meta></front></article>"#
  );
  Document::parse(xml.as_bytes()).unwrap()
}

/// An author contrib with the given name and cross-references.
fn author(given: &str, surname: &str, xrefs: &str) -> String {
  format!(
    r#"<contrib contrib-type="author"><name><surname>{surname}</surname><given-names>{given}</given-names></name>{xrefs}</contrib>"#
  )
}

#[traced_test]
#[test]
fn test_full_manuscript() {
  let document = fixture("10.1371_journal.pone.0000001.xml");
  let mut seen = SeenNames::new();

  let extraction = Extractor::default().extract("10.1371/journal.pone.0000001", &document, &mut seen);

  assert_eq!(extraction.title, "Seasonal migration of Apis mellifera colonies");
  let rows: Vec<_> = extraction
    .records
    .iter()
    .map(|r| (r.order, r.name.as_str(), r.affiliation.as_str(), r.role))
    .collect();
  assert_eq!(rows, vec![
    (
      1,
      "Mei-Ling Chen（第一作者）",
      "Department of Entomology, National Taiwan University, Taipei, Taiwan",
      Some(Role::First)
    ),
    (
      2,
      "Daniel Okafor（通訊作者）",
      "2 Institute of Ecology, University of Lagos, Lagos, Nigeria",
      Some(Role::Corresponding)
    ),
    (3, "Astrid Lindqvist", "N/A", None),
    (4, "N/A", "Department of Entomology, National Taiwan University, Taipei, Taiwan", None),
  ]);
  assert!(extraction.records.iter().all(|r| r.doi == "10.1371/journal.pone.0000001"));
  assert!(extraction.records.iter().all(|r| r.title == extraction.title));
  assert_eq!(seen.len(), 4);
  assert!(logs_contain("lists 4 authors and 2 affiliations"));
}

#[test]
fn test_orders_follow_document_order() {
  let contribs: String =
    (0..5).map(|i| author(&format!("Given{i}"), &format!("Surname{i}"), "")).collect();
  let document = article(&contribs, "");

  let extraction = Extractor::default().extract("doi", &document, &mut SeenNames::new());

  let orders: Vec<_> = extraction.records.iter().map(|r| r.order).collect();
  assert_eq!(orders, vec![1, 2, 3, 4, 5]);
  assert_eq!(extraction.records[4].name, "Given4 Surname4");
}

#[test]
fn test_first_author_marker_wins_over_corresp() {
  let contribs = [
    author("Ada", "Lovelace", r#"<xref ref-type="corresp" rid="c1"/>"#),
    author("Charles", "Babbage", r#"<xref ref-type="corresp" rid="c1"/>"#),
    author("Mary", "Somerville", r#"<xref ref-type="fn" rid="f1"/>"#),
  ]
  .concat();
  let document = article(&contribs, "");

  let records = Extractor::default().extract("doi", &document, &mut SeenNames::new()).records;

  assert_eq!(records[0].name, format!("Ada Lovelace{FIRST}"));
  assert_eq!(records[1].name, format!("Charles Babbage{CORRESPONDING}"));
  assert_eq!(records[2].name, "Mary Somerville");
  assert!(records[0].is_first_author());
  assert!(!records[1].is_first_author());
}

#[test]
fn test_affiliation_resolution() {
  let contribs = [
    author("A", "One", r#"<xref ref-type="aff" rid="aff1"/>"#),
    author("B", "Two", r#"<xref ref-type="aff" rid="aff2"/>"#),
    author("C", "Three", r#"<xref ref-type="aff" rid="missing"/>"#),
    author("D", "Four", ""),
    author("E", "Five", r#"<xref ref-type="aff"/>"#),
  ]
  .concat();
  let affs = r#"
    <aff id="aff1"><label>1</label><addr-line>Line One</addr-line></aff>
    <aff id="aff2"><label>2</label> Whole   element text </aff>
    <aff><addr-line>Unaddressable</addr-line></aff>
  "#;
  let document = article(&contribs, affs);

  let affiliations: Vec<_> = Extractor::default()
    .extract("doi", &document, &mut SeenNames::new())
    .records
    .into_iter()
    .map(|r| r.affiliation)
    .collect();

  assert_eq!(affiliations, vec!["Line One", "2 Whole element text", "N/A", "N/A", "N/A"]);
}

#[test]
fn test_later_affiliation_with_same_id_wins() {
  let document = article(
    &author("A", "One", r#"<xref ref-type="aff" rid="aff1"/>"#),
    r#"<aff id="aff1">Old</aff><aff id="aff1">New</aff>"#,
  );
  let map = AffiliationMap::from_document(&document, TextStyle::Collapsed);

  assert_eq!(map.len(), 1);
  assert_eq!(map.get("aff1"), Some("New"));
}

#[test]
fn test_display_name_fallbacks() {
  let contribs = [
    r#"<contrib contrib-type="author"><name><surname> Solo </surname></name></contrib>"#,
    r#"<contrib contrib-type="author"><name><given-names>Only</given-names></name></contrib>"#,
    r#"<contrib contrib-type="author"><collab>Consortium</collab></contrib>"#,
    r#"<contrib contrib-type="author"><name><surname>Blank</surname><given-names> </given-names></name></contrib>"#,
  ]
  .concat();
  let document = article(&contribs, "");

  let names: Vec<_> = Extractor::default()
    .extract("doi", &document, &mut SeenNames::new())
    .records
    .into_iter()
    .map(|r| (r.order, r.name))
    .collect();

  // The second and third contribs both resolve to the placeholder, so the third is a repeat.
  assert_eq!(names, vec![
    (1, format!("Solo{FIRST}")),
    (2, "N/A".to_string()),
    (4, " Blank".to_string()),
  ]);
}

#[test]
fn test_only_authors_of_front_group_count() {
  let xml = r#"<article>
    <front><article-meta>
      <article-title>Front</article-title>
      <contrib-group>
        <contrib contrib-type="editor"><name><surname>Editor</surname></name></contrib>
        <contrib contrib-type="author"><name><surname>Author</surname></name></contrib>
        <contrib><name><surname>Untyped</surname></name></contrib>
      </contrib-group>
    </article-meta></front>
    <back><contrib-group>
      <contrib contrib-type="author"><name><surname>Appendix</surname></name></contrib>
    </contrib-group></back>
  </article>"#;
  let document = Document::parse(xml.as_bytes()).unwrap();

  let records = Extractor::default().extract("doi", &document, &mut SeenNames::new()).records;

  assert_eq!(records.len(), 1);
  assert_eq!(records[0].order, 1);
  assert_eq!(records[0].name, format!("Author{FIRST}"));
}

#[test]
fn test_contrib_group_without_front() {
  let xml = r#"<article><sub-article>
    <contrib-group><contrib contrib-type="author"><name><surname>Loose</surname></name></contrib></contrib-group>
  </sub-article></article>"#;
  let document = Document::parse(xml.as_bytes()).unwrap();

  let records = Extractor::default().extract("doi", &document, &mut SeenNames::new()).records;
  assert_eq!(records.len(), 1);
}

#[test]
fn test_no_contrib_group_keeps_title() {
  let document = fixture("10.1371_journal.pone.0000003.xml");
  let mut seen = SeenNames::new();

  let extraction = Extractor::default().extract("doi", &document, &mut seen);

  assert_eq!(extraction.title, "Correction: Seasonal migration of honey bee colonies");
  assert!(extraction.records.is_empty());
  assert!(seen.is_empty());
}

#[test]
fn test_missing_title() {
  let document = Document::parse(b"<article/>").unwrap();
  let extraction = Extractor::default().extract("doi", &document, &mut SeenNames::new());
  assert_eq!(extraction.title, "N/A");
  assert!(extraction.records.is_empty());
}

#[test]
fn test_global_dedup_across_documents() {
  let extractor = Extractor::default();
  let mut seen = SeenNames::new();

  let first = extractor.extract(
    "10.1371/journal.pone.0000001",
    &fixture("10.1371_journal.pone.0000001.xml"),
    &mut seen,
  );
  let second = extractor.extract(
    "10.1371/journal.pone.0000002",
    &fixture("10.1371_journal.pone.0000002.xml"),
    &mut seen,
  );

  assert_eq!(first.records.len(), 4);
  let rows: Vec<_> = second.records.iter().map(|r| (r.order, r.name.as_str())).collect();
  assert_eq!(rows, vec![
    (1, "Giulia Rossi（第一作者）"),
    (3, "Hiroshi Tanaka（通訊作者）"),
  ]);
  assert!(seen.contains("Daniel Okafor"));
}

#[test]
fn test_dedup_within_one_document() {
  let contribs = [author("Sam", "Lee", ""), author("Sam", "Lee", ""), author("Kim", "Park", "")].concat();
  let document = article(&contribs, "");

  let records = Extractor::default().extract("doi", &document, &mut SeenNames::new()).records;

  let rows: Vec<_> = records.iter().map(|r| (r.order, r.name.as_str())).collect();
  assert_eq!(rows, vec![(1, "Sam Lee（第一作者）"), (3, "Kim Park")]);
}

#[test]
fn test_dedup_policies() {
  let contribs = [author("Sam", "Lee", ""), author("Sam", "Lee", "")].concat();
  let document = article(&contribs, "");

  let per_document = Extractor::new(&Config::default().with_dedup(DedupPolicy::PerDocument));
  let mut seen = SeenNames::new();
  assert_eq!(per_document.extract("a", &document, &mut seen).records.len(), 1);
  assert_eq!(per_document.extract("b", &document, &mut seen).records.len(), 1);
  assert!(seen.is_empty());

  let off = Extractor::new(&Config::default().with_dedup(DedupPolicy::Off));
  assert_eq!(off.extract("a", &document, &mut seen).records.len(), 2);
}

#[test]
fn test_text_styles_for_title_and_bare_affiliation() {
  let document = Document::parse(
    br#"<article><front><article-meta>
         <title-group><article-title>Seasonal migration of <italic>Apis</italic> colonies</article-title></title-group>
         <contrib-group>
           <contrib contrib-type="author"><name><surname>Chen</surname></name><xref ref-type="aff" rid="a1"/></contrib>
         </contrib-group>
         <aff id="a1"><label>1</label>
           Dept X</aff>
       </article-meta></front></article>"#,
  )
  .unwrap();

  let collapsed = Extractor::default().extract("10.1/x", &document, &mut SeenNames::new());
  assert_eq!(collapsed.title, "Seasonal migration of Apis colonies");
  assert_eq!(collapsed.records[0].affiliation, "1 Dept X");

  let stripped = Extractor::new(&Config::default().with_text_style(TextStyle::Stripped));
  let stripped = stripped.extract("10.1/x", &document, &mut SeenNames::new());
  assert_eq!(stripped.title, "Seasonal migration ofApiscolonies");
  assert_eq!(stripped.records[0].affiliation, "1Dept X");
  assert_eq!(stripped.records[0].title, stripped.title);
}

#[test]
fn test_custom_markers() {
  let contribs =
    [author("A", "One", ""), author("B", "Two", r#"<xref ref-type="corresp" rid="c"/>"#)].concat();
  let document = article(&contribs, "");
  let extractor = Extractor::new(&Config::default().with_markers(" [1st]", " [*]"));

  let names: Vec<_> = extractor
    .extract("doi", &document, &mut SeenNames::new())
    .records
    .into_iter()
    .map(|r| r.name)
    .collect();
  assert_eq!(names, vec!["A One [1st]", "B Two [*]"]);
}
