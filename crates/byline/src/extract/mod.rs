//! Per-article extraction rules.
//!
//! The [`Extractor`] reads one parsed manuscript and produces its author
//! [`Record`]s:
//!
//! 1. The title is the first `article-title`, or the missing placeholder. Title and affiliation
//!    text is flattened according to the configured [`TextStyle`].
//! 2. Every `aff` with an `id` goes into an [`AffiliationMap`], preferring the text of its
//!    `addr-line` over the whole element.
//! 3. Authors are the `contrib contrib-type="author"` elements of the first `contrib-group` in
//!    `front` (or in the whole document when there is no `front`). Their document order gives the
//!    1-based `Order`.
//! 4. Names already in [`SeenNames`] are skipped. The skipped author still occupies its position.
//! 5. Position 1 gets the first-author marker; any other author with a `corresp` cross-reference
//!    gets the corresponding-author marker.
//! 6. The first `aff` cross-reference is resolved through the map, or the placeholder is used.
//!
//! [`SeenNames`] is owned by the caller and shared by every article of a
//! batch, so a name emitted for one article suppresses the same name in all
//! later ones.

use super::*;

#[cfg(test)] mod tests;

/// Applies the extraction rules to parsed manuscripts.
#[derive(Debug, Clone)]
pub struct Extractor {
  /// Suffix for the first author's name
  first_author_marker:  String,
  /// Suffix for a non-first corresponding author's name
  corresponding_marker: String,
  /// Placeholder for absent values
  missing:              String,
  /// Which names count as repeats
  dedup:                DedupPolicy,
  /// Flattening of title and affiliation text
  text_style:           TextStyle,
}

/// Result of extracting one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
  /// Article title, or the missing placeholder
  pub title:   String,
  /// Author records in author-list order
  pub records: Vec<Record>,
}

/// Author display names already emitted during a batch.
#[derive(Debug, Clone, Default)]
pub struct SeenNames {
  /// Unmarked display names
  names: HashSet<String>,
}

/// Affiliation id to affiliation text, for one article.
#[derive(Debug, Clone, Default)]
pub struct AffiliationMap {
  /// Keyed by the `aff` element's `id`
  entries: HashMap<String, String>,
}

impl Default for Extractor {
  fn default() -> Self { Self::new(&Config::default()) }
}

impl Extractor {
  /// Creates an extractor using the markers, placeholder and policy of `config`.
  pub fn new(config: &Config) -> Self {
    Self {
      first_author_marker:  config.first_author_marker.clone(),
      corresponding_marker: config.corresponding_marker.clone(),
      missing:              config.missing.clone(),
      dedup:                config.dedup,
      text_style:           config.text_style,
    }
  }

  /// Extracts the title and author records of one article.
  ///
  /// `identifier` is copied into every record's DOI column. `seen` is
  /// consulted and updated according to the configured [`DedupPolicy`].
  ///
  /// # Examples
  ///
  /// ```
  /// use byline::{document::Document, extract::{Extractor, SeenNames}};
  ///
  /// let xml = br#"<article><front>
  ///   <article-meta><title-group><article-title>Sample</article-title></title-group>
  ///   <contrib-group>
  ///     <contrib contrib-type="author"><name><surname>Doe</surname><given-names>Jane</given-names></name></contrib>
  ///   </contrib-group></article-meta>
  /// </front></article>"#;
  /// let document = Document::parse(xml)?;
  /// let mut seen = SeenNames::new();
  ///
  /// let extraction = Extractor::default().extract("10.1371/x", &document, &mut seen);
  /// assert_eq!(extraction.title, "Sample");
  /// assert_eq!(extraction.records[0].name, "Jane Doe（第一作者）");
  /// assert_eq!(extraction.records[0].affiliation, "N/A");
  /// # Ok::<(), byline::error::BylineError>(())
  /// ```
  pub fn extract(&self, identifier: &str, document: &Document, seen: &mut SeenNames) -> Extraction {
    let title = document
      .find("article-title")
      .map(|element| self.text_style.apply(element))
      .unwrap_or_else(|| self.missing.clone());
    let affiliations = AffiliationMap::from_document(document, self.text_style);
    let authors = author_list(document);

    debug!(
      "{}: \"{}\" lists {} authors and {} affiliations",
      identifier,
      title,
      authors.len(),
      affiliations.len()
    );

    let mut article_names = SeenNames::new();
    let mut records = Vec::with_capacity(authors.len());

    for (index, author) in authors.into_iter().enumerate() {
      let order = index + 1;
      let name = self.display_name(author);

      let is_new = match self.dedup {
        DedupPolicy::Global => seen.insert(&name),
        DedupPolicy::PerDocument => article_names.insert(&name),
        DedupPolicy::Off => true,
      };
      if !is_new {
        trace!("{}: skipping repeated author {} at position {}", identifier, name, order);
        continue;
      }

      let role = if order == 1 {
        Some(Role::First)
      } else if author.find_with("xref", "ref-type", "corresp").is_some() {
        Some(Role::Corresponding)
      } else {
        None
      };
      let name = match role {
        Some(Role::First) => format!("{name}{}", self.first_author_marker),
        Some(Role::Corresponding) => format!("{name}{}", self.corresponding_marker),
        None => name,
      };

      let affiliation = author
        .find_with("xref", "ref-type", "aff")
        .and_then(|xref| xref.attr("rid"))
        .and_then(|rid| affiliations.get(rid))
        .map_or_else(|| self.missing.clone(), str::to_string);

      records.push(Record {
        title: title.clone(),
        name,
        order,
        affiliation,
        doi: identifier.to_string(),
        role,
      });
    }

    Extraction { title, records }
  }

  /// "{given-names} {surname}", or the surname alone, or the placeholder.
  fn display_name(&self, author: &Element) -> String {
    let surname = author.find("surname").map(|e| e.text().trim().to_string());
    let given_names = author.find("given-names").map(|e| e.text().trim().to_string());
    match (given_names, surname) {
      (Some(given_names), Some(surname)) => format!("{given_names} {surname}"),
      (None, Some(surname)) => surname,
      _ => self.missing.clone(),
    }
  }
}

/// Author `contrib`s of the front-matter contributor group, in document order.
fn author_list(document: &Document) -> Vec<&Element> {
  document
    .find("front")
    .and_then(|front| front.find("contrib-group"))
    .or_else(|| document.find("contrib-group"))
    .map(|group| group.find_all_with("contrib", "contrib-type", "author").collect())
    .unwrap_or_default()
}

impl SeenNames {
  /// Creates an empty set.
  pub fn new() -> Self { Self::default() }

  /// Records `name`. Returns `false` when it was already present.
  pub fn insert(&mut self, name: &str) -> bool {
    if self.names.contains(name) {
      false
    } else {
      self.names.insert(name.to_string())
    }
  }

  /// Whether `name` has been recorded.
  pub fn contains(&self, name: &str) -> bool { self.names.contains(name) }

  /// Number of distinct names recorded.
  pub fn len(&self) -> usize { self.names.len() }

  /// Whether no name has been recorded.
  pub fn is_empty(&self) -> bool { self.names.is_empty() }

  /// Forgets every recorded name.
  pub fn clear(&mut self) { self.names.clear() }
}

impl AffiliationMap {
  /// Collects every `aff` element that has an `id`, flattening its text with
  /// `text_style`. A later `aff` with the same id replaces an earlier one.
  pub fn from_document(document: &Document, text_style: TextStyle) -> Self {
    let entries = document
      .find_all("aff")
      .filter_map(|aff| {
        let id = aff.attr("id")?;
        let text = text_style.apply(aff.find("addr-line").unwrap_or(aff));
        Some((id.to_string(), text))
      })
      .collect();
    Self { entries }
  }

  /// Affiliation text for `id`.
  pub fn get(&self, id: &str) -> Option<&str> { self.entries.get(id).map(String::as_str) }

  /// Number of addressable affiliations.
  pub fn len(&self) -> usize { self.entries.len() }

  /// Whether the article has no addressable affiliation.
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
