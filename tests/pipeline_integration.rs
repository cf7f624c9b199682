//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: HTTP GET → period table → Parquet file

use arrow::array::{Array, BooleanArray, Int64Array, StringArray, TimestampMillisecondArray};
use chrono::NaiveDate;
use ipca_etl::http::HttpClientConfig;
use ipca_etl::{
    fetch, output, transform, Error, ErrorKind, FetchError, Pipeline, PipelineConfig,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::json;
use std::fs::File;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_periods(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/Ajax/JSon/Tabela/1/1737"))
        .and(query_param("versao", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

fn endpoint(mock_server: &MockServer) -> String {
    format!("{}/Ajax/JSon/Tabela/1/1737?versao=-1", mock_server.uri())
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[tokio::test]
async fn test_pipeline_single_period() {
    let mock_server = MockServer::start().await;
    mount_periods(
        &mock_server,
        json!({"Periodos": {"Periodos": [{
            "Id": 1,
            "Codigo": "202401",
            "Nome": "janeiro 2024",
            "Disponivel": true,
            "DataLiberacao": "2024-02-09"
        }]}}),
    )
    .await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("data").join("ipca_dados.parquet");

    let summary = Pipeline::new(
        PipelineConfig::new()
            .with_url(endpoint(&mock_server))
            .with_output(&output_path),
    )
    .run()
    .await
    .unwrap();

    assert_eq!(summary.rows, 1);
    assert_eq!(summary.output, output_path);

    let file = File::open(&output_path).unwrap();
    let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .unwrap()
        .build()
        .unwrap();
    let batch = reader.next().unwrap().unwrap();

    let schema = batch.schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(
        names,
        vec![
            "id_periodo",
            "codigo_periodo",
            "nome_periodo",
            "disponivel",
            "data_liberacao"
        ]
    );
    assert_eq!(batch.num_rows(), 1);

    let id = batch.column(0).as_any().downcast_ref::<Int64Array>().unwrap();
    let code = batch.column(1).as_any().downcast_ref::<StringArray>().unwrap();
    let name = batch.column(2).as_any().downcast_ref::<StringArray>().unwrap();
    let available = batch.column(3).as_any().downcast_ref::<BooleanArray>().unwrap();
    let released = batch
        .column(4)
        .as_any()
        .downcast_ref::<TimestampMillisecondArray>()
        .unwrap();

    assert_eq!(id.value(0), 1);
    assert_eq!(code.value(0), "202401");
    assert_eq!(name.value(0), "janeiro 2024");
    assert!(available.value(0));
    assert_eq!(
        released.value_as_datetime(0),
        NaiveDate::from_ymd_opt(2024, 2, 9)
            .unwrap()
            .and_hms_opt(0, 0, 0)
    );
}

#[tokio::test]
async fn test_stage_functions_compose() {
    let mock_server = MockServer::start().await;
    mount_periods(
        &mock_server,
        json!({"Periodos": {"Periodos": [
            {"Id": 1, "Codigo": "202401", "Nome": "janeiro 2024", "Disponivel": true, "DataLiberacao": "2024-01-01"},
            {"Id": 2, "Codigo": "202402", "Nome": "fevereiro 2024", "Disponivel": false, "DataLiberacao": "not-a-date"}
        ]}, "Outro": "ignored"}),
    )
    .await;

    let raw = fetch(&endpoint(&mock_server)).await.unwrap();
    let table = transform(&raw).unwrap();
    assert_eq!(table.num_rows(), 2);
    assert!(table.rows()[0].data_liberacao.is_some());
    assert!(table.rows()[1].data_liberacao.is_none());

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("ipca.parquet");
    let rows = output::write(&table, &output_path).unwrap();
    assert_eq!(rows, 2);

    let file = File::open(&output_path).unwrap();
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
    assert_eq!(builder.metadata().file_metadata().num_rows(), 2);

    let batch = builder.build().unwrap().next().unwrap().unwrap();
    let released = batch
        .column(4)
        .as_any()
        .downcast_ref::<TimestampMillisecondArray>()
        .unwrap();
    assert!(released.is_valid(0));
    assert!(released.is_null(1));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_pipeline_unreachable_writes_nothing() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("data").join("ipca_dados.parquet");

    let err = Pipeline::new(
        PipelineConfig::new()
            .with_url("http://127.0.0.1:1/periods")
            .with_output(&output_path),
    )
    .run()
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert!(matches!(err, Error::Fetch(FetchError::Request { .. })));
    assert!(!output_path.parent().unwrap().exists());
}

#[tokio::test]
async fn test_pipeline_timeout_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Periodos": {"Periodos": [{"Id": 1}]}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("ipca.parquet");

    let err = Pipeline::new(
        PipelineConfig::new()
            .with_url(format!("{}/slow", mock_server.uri()))
            .with_output(&output_path)
            .with_http(
                HttpClientConfig::builder()
                    .timeout(Duration::from_millis(100))
                    .build(),
            ),
    )
    .run()
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Fetch(FetchError::Timeout { .. })));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_pipeline_http_error_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("erro interno"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("ipca.parquet");

    let err = Pipeline::new(
        PipelineConfig::new()
            .with_url(endpoint(&mock_server))
            .with_output(&output_path),
    )
    .run()
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert!(err.to_string().contains("HTTP 500"));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_pipeline_missing_periods() {
    let mock_server = MockServer::start().await;
    mount_periods(&mock_server, json!({"Periodos": {}})).await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("ipca.parquet");

    let err = Pipeline::new(
        PipelineConfig::new()
            .with_url(endpoint(&mock_server))
            .with_output(&output_path),
    )
    .run()
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transform);
    assert!(!output_path.exists());
}
