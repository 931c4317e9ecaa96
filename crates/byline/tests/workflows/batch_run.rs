use super::*;

#[tokio::test]
async fn test_three_identifiers_one_missing() -> TestResult<()> {
  let input = format!("{FIRST_DOI}\n{MISSING_DOI}\n{SECOND_DOI}\n");
  let report = run_fixtures(&Config::default(), &input).await;

  assert_eq!(report.failures.len(), 1);
  assert_eq!(report.failures[0].identifier, MISSING_DOI);
  assert_eq!(report.documents.len(), 2);

  let dois: Vec<_> = report.records.iter().map(|r| r.doi.as_str()).collect();
  assert_eq!(dois, vec![FIRST_DOI, FIRST_DOI, FIRST_DOI, FIRST_DOI, SECOND_DOI, SECOND_DOI]);
  Ok(())
}

#[tokio::test]
async fn test_repeated_author_dropped_from_later_article() -> TestResult<()> {
  let input = format!("{FIRST_DOI}\n{SECOND_DOI}");
  let report = run_fixtures(&Config::default(), &input).await;

  let okafor: Vec<_> =
    report.records.iter().filter(|r| r.name.starts_with("Daniel Okafor")).collect();
  assert_eq!(okafor.len(), 1);
  assert_eq!(okafor[0].doi, FIRST_DOI);
  assert_eq!(report.documents[1].records, 2);
  Ok(())
}

#[tokio::test]
async fn test_article_order_changes_who_survives() -> TestResult<()> {
  let input = format!("{SECOND_DOI}\n{FIRST_DOI}");
  let report = run_fixtures(&Config::default(), &input).await;

  let okafor: Vec<_> =
    report.records.iter().filter(|r| r.name.starts_with("Daniel Okafor")).collect();
  assert_eq!(okafor.len(), 1);
  assert_eq!(okafor[0].doi, SECOND_DOI);
  assert_eq!(okafor[0].name, "Daniel Okafor（通訊作者）");
  assert_eq!(okafor[0].affiliation, "Dipartimento di Biologia, Università di Padova, Padova, Italy");
  Ok(())
}

#[tokio::test]
async fn test_per_document_policy_keeps_repeated_author() -> TestResult<()> {
  let config = Config::default().with_dedup(DedupPolicy::PerDocument);
  let input = format!("{FIRST_DOI}\n{SECOND_DOI}");
  let report = run_fixtures(&config, &input).await;

  assert_eq!(report.records.iter().filter(|r| r.name.starts_with("Daniel Okafor")).count(), 2);
  Ok(())
}

#[tokio::test]
async fn test_article_without_authors_is_reported_but_empty() -> TestResult<()> {
  let report = run_fixtures(&Config::default(), CORRECTION_DOI).await;

  assert!(report.is_empty());
  assert!(report.failures.is_empty());
  assert_eq!(report.documents[0].title, "Correction: Seasonal migration of honey bee colonies");
  Ok(())
}

#[tokio::test]
async fn test_everything_failing_is_still_a_report() -> TestResult<()> {
  let report = run_fixtures(&Config::default(), &format!("{MISSING_DOI}\nnot-a-doi")).await;

  assert!(report.is_empty());
  assert_eq!(report.failures.len(), 2);
  Ok(())
}
