// tests/integration/serve_stdio.rs
use serde_json::{Value, json};

use crate::common::Fixture;

#[test]
fn serve_answers_json_lines() {
    let fx = Fixture::new();
    let input = [
        json!({"id": 1, "method": "index.head", "params": {"remotePath": fx.data_str(), "rescan": 5_000_000_000_u64}}),
        json!({"id": 2, "method": "index.get", "params": {"remotePath": "~/data", "rescan": 0}}),
        json!({"id": 3, "method": "index.head", "params": null}),
        json!({"id": 4, "method": "index.head", "params": {"remotePath": fx.home.path().join("missing")}}),
    ]
    .iter()
    .map(Value::to_string)
    .collect::<Vec<_>>()
    .join("\n");

    let output = fx.command().arg("serve").write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let replies: Vec<Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(replies.len(), 4);

    assert_eq!(replies[0], json!({"id": 1, "result": {"absPath": fx.data_str(), "count": 3, "diskSize": 4096}}));
    assert_eq!(replies[2], json!({"id": 3, "error": "invalid empty request"}));
    assert!(replies[3]["error"].as_str().unwrap().contains("does not exist"));

    #[cfg(unix)]
    {
        let entries = replies[1]["result"]["index"]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(replies[1]["result"]["index"]["root"], fx.data_str());
    }
}
