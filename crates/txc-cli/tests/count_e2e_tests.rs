//! End-to-end tests for the txc count command
//!
//! These run the real binary against a mock Entrez server and validate:
//! - the full pipeline in each output format
//! - multi-word name handling
//! - not-found diagnostics and exit behavior
//! - partial results on per-species failures

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn esearch_body(ids: &[u32]) -> String {
    let id_elems: String = ids.iter().map(|id| format!("<Id>{}</Id>", id)).collect();
    format!(
        "<eSearchResult><Count>{}</Count><IdList>{}</IdList></eSearchResult>",
        ids.len(),
        id_elems
    )
}

fn efetch_body(id: u32, name: &str, rank: &str) -> String {
    format!(
        "<TaxaSet><Taxon><TaxId>{}</TaxId><ScientificName>{}</ScientificName><Rank>{}</Rank></Taxon></TaxaSet>",
        id, name, rank
    )
}

async fn mock_fetch(server: &MockServer, id: u32, name: &str, rank: &str) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(efetch_body(id, name, rank)))
        .mount(server)
        .await;
}

async fn mock_children(server: &MockServer, name: &str, ids: &[u32]) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "taxonomy"))
        .and(query_param("term", format!("\"{}\"[next level]", name)))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_body(ids)))
        .mount(server)
        .await;
}

async fn mock_name_search(server: &MockServer, name: &str, ids: &[u32]) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "taxonomy"))
        .and(query_param("term", format!("\"{}\"", name)))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_body(ids)))
        .mount(server)
        .await;
}

async fn mock_assembly_count(server: &MockServer, name: &str, count: u64) {
    let ids: Vec<u32> = (1..=count as u32).collect();
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "assembly"))
        .and(query_param("term", format!("\"{}\"", name)))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_body(&ids)))
        .mount(server)
        .await;
}

/// Mount a species leaf census: id -> name -> no children -> count
async fn mount_species_leaf(server: &MockServer, id: u32, name: &str, count: u64) {
    mock_fetch(server, id, name, "species").await;
    mock_children(server, name, &[]).await;
    mock_assembly_count(server, name, count).await;
}

fn txc_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("txc").unwrap();
    cmd.env_remove("TXC_EMAIL")
        .env_remove("TXC_ENTREZ_URL")
        .arg("--email")
        .arg("tests@example.com")
        .arg("--entrez-url")
        .arg(server.uri());
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn count_compact_format() {
    let server = MockServer::start().await;
    mount_species_leaf(&server, 9606, "Homo sapiens", 42).await;

    let mut cmd = txc_cmd(&server);
    cmd.arg("count").arg("9606").arg("--format").arg("compact");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Homo sapiens\t42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn count_table_format() {
    let server = MockServer::start().await;
    mount_species_leaf(&server, 9606, "Homo sapiens", 42).await;

    let mut cmd = txc_cmd(&server);
    cmd.arg("count").arg("9606");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Homo sapiens"))
        .stdout(predicate::str::contains("42"))
        .stdout(predicate::str::contains("Species"));
}

#[tokio::test(flavor = "multi_thread")]
async fn count_json_format() {
    let server = MockServer::start().await;
    mount_species_leaf(&server, 9606, "Homo sapiens", 42).await;

    let mut cmd = txc_cmd(&server);
    cmd.arg("count").arg("9606").arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["root"]["name"], "Homo sapiens");
    assert_eq!(json["root"]["rank"], "species");
    assert_eq!(json["species"]["entries"][0]["count"]["counted"], 42);
    assert!(json["failed_taxa"].as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn count_accepts_multiword_names() {
    let server = MockServer::start().await;
    mock_name_search(&server, "Canis lupus", &[9612]).await;
    mount_species_leaf(&server, 9612, "Canis lupus", 8).await;

    let mut cmd = txc_cmd(&server);
    cmd.arg("count")
        .arg("Canis")
        .arg("lupus")
        .arg("--format")
        .arg("compact");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Canis lupus\t8"));
}

#[tokio::test(flavor = "multi_thread")]
async fn count_unknown_taxon_reports_the_input_literally() {
    let server = MockServer::start().await;
    mock_name_search(&server, "Xyzzyxnotarealtaxon", &[]).await;

    let mut cmd = txc_cmd(&server);
    cmd.arg("count").arg("Xyzzyxnotarealtaxon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Xyzzyxnotarealtaxon"))
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn count_requires_an_email() {
    let server = MockServer::start().await;

    let mut cmd = Command::cargo_bin("txc").unwrap();
    cmd.env_remove("TXC_EMAIL")
        .arg("--entrez-url")
        .arg(server.uri())
        .arg("count")
        .arg("9606");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("email"));
}

#[tokio::test(flavor = "multi_thread")]
async fn count_flags_failed_species_in_compact_output() {
    let server = MockServer::start().await;
    mock_fetch(&server, 10, "Apis", "genus").await;
    mock_children(&server, "Apis", &[11, 12]).await;
    mock_fetch(&server, 11, "Apis mellifera", "species").await;
    mock_fetch(&server, 12, "Apis cerana", "species").await;
    mock_children(&server, "Apis mellifera", &[]).await;
    mock_children(&server, "Apis cerana", &[]).await;
    // assembly endpoint fails for one species only
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "assembly"))
        .and(query_param("term", "\"Apis mellifera\""))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mock_assembly_count(&server, "Apis cerana", 3).await;

    let mut cmd = txc_cmd(&server);
    cmd.env("TXC_MAX_RETRIES", "1")
        .arg("count")
        .arg("10")
        .arg("--format")
        .arg("compact");

    // partial results are an outcome, not an error
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Apis mellifera\tfailed"))
        .stdout(predicate::str::contains("Apis cerana\t3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_subcommand_exits_with_usage_error() {
    let mut cmd = Command::cargo_bin("txc").unwrap();
    cmd.assert().failure();
}
