use super::*;

#[tokio::test]
async fn test_batch_to_csv_file() -> TestResult<()> {
  let report = run_fixtures(&Config::default(), &format!("{FIRST_DOI}\n{SECOND_DOI}")).await;
  let dir = tempdir()?;
  let path = dir.path().join("authors.csv");

  let format = ExportFormat::from_path(&path).unwrap_or_default();
  export::write_file(&report.records, format, &path)?;

  let content = std::fs::read_to_string(&path)?;
  let mut lines = content.lines();
  assert_eq!(lines.next(), Some("Title,Name,Order,Affiliation,DOI"));
  assert_eq!(
    lines.next(),
    Some(
      "Seasonal migration of Apis mellifera colonies,Mei-Ling Chen（第一作者）,1,\"Department of \
       Entomology, National Taiwan University, Taipei, Taiwan\",10.1371/journal.pone.0000001"
    )
  );
  assert_eq!(lines.count(), 5);
  Ok(())
}

#[tokio::test]
async fn test_batch_to_json() -> TestResult<()> {
  let report = run_fixtures(&Config::default(), SECOND_DOI).await;
  let mut out = Vec::new();
  export::write(&report.records, ExportFormat::Json, &mut out)?;

  let rows: Vec<serde_json::Value> = serde_json::from_slice(&out)?;
  assert_eq!(rows.len(), 3);
  assert_eq!(rows[2]["Name"], "Hiroshi Tanaka（通訊作者）");
  assert_eq!(rows[2]["Order"], 3);
  Ok(())
}
