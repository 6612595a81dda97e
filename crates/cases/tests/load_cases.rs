use std::fs;

use tempfile::tempdir;
use wafreport_cases::{CaseTable, CasesError};

const EXPORT: &str = "\
ticketnumber,title,createdon,product,rootcause,customerstatement,resolution,fullpath
120012346,App Gateway returns 502,2024-01-08,Application Gateway,Probe path mismatch,\"Users see 502, intermittently\",Aligned probe with Traefik health endpoint,Azure/Networking/App Gateway
120012347,TLS handshake failures,2024-02-11,Application Gateway,Expired certificate,Public site down,Renewed certificate from Key Vault,Azure/Networking/App Gateway
";

#[test]
fn test_load_support_case_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("azure_support_cases.csv");
    fs::write(&path, EXPORT).unwrap();

    let cases = CaseTable::from_csv(&path).unwrap();

    assert_eq!(cases.col_count(), 8);
    assert_eq!(cases.row_count(), 2);
    assert_eq!(cases.headers()[0], "ticketnumber");
    assert_eq!(cases.headers()[7], "fullpath");
    assert_eq!(
        cases.get(0, "customerstatement"),
        Some("Users see 502, intermittently")
    );
    assert_eq!(
        cases.column("ticketnumber"),
        Some(vec!["120012346", "120012347"])
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = CaseTable::from_csv(dir.path().join("nope.csv"));

    assert!(matches!(result, Err(CasesError::Io(_))));
}

#[test]
fn test_invalid_utf8_is_csv_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, b"id,title\n1,\xff\xfe\n").unwrap();

    let result = CaseTable::from_csv(&path);
    assert!(matches!(result, Err(CasesError::Csv(_))));
}
