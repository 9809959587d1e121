//! Integration tests for end-to-end service compilation

use azure_bindings_compiler::{
    bundled_index, compile, function_metadata, parse_catalog, parse_service, serialize,
    validate_service, BindingError, CompilerError, CompilerOptions, FunctionRegistry,
};
use serde_json::{json, Value};

const SERVICE_YAML: &str = r#"
service: storefront
custom:
  azureBindings:
    scriptExtension: js
functions:
  hello:
    handler: src/handlers/hello.sayHello
    events:
      - http: true
        x-azure-settings:
          authLevel: anonymous
  github:
    handler: src/handlers/github.onPush
    events:
      - http: true
        x-azure-settings:
          webHookType: github
  order:
    handler: src/handlers/order.place
    events:
      - http: true
        x-azure-settings:
          methods:
            - post
      - queue: orders
        x-azure-settings:
          name: outputItem
  nightly:
    handler: cleanup
    events:
      - timer: true
        x-azure-settings:
          schedule: "0 0 3 * * *"
"#;

fn compile_yaml(yaml: &str) -> Result<Vec<(String, Value)>, CompilerError> {
    let service = parse_service(yaml)?;
    let compiled = compile(&service, bundled_index()?)?;
    compiled
        .into_iter()
        .map(|f| -> Result<(String, Value), CompilerError> {
            let text = serialize(&f.config)?;
            Ok((f.name, serde_json::from_str(&text).unwrap()))
        })
        .collect()
}

#[test]
fn test_compile_storefront_service() {
    let documents = compile_yaml(SERVICE_YAML).unwrap();
    let names: Vec<&str> = documents.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["hello", "github", "order", "nightly"]);

    assert_eq!(
        documents[0].1,
        json!({
            "disabled": false,
            "bindings": [
                {
                    "type": "httpTrigger",
                    "direction": "in",
                    "name": "req",
                    "authLevel": "anonymous"
                },
                { "type": "http", "direction": "out", "name": "$return" }
            ],
            "entryPoint": "sayHello",
            "scriptFile": "src/handlers/hello.js"
        })
    );
}

#[test]
fn test_web_hook_function_document() {
    let documents = compile_yaml(SERVICE_YAML).unwrap();
    let github = &documents[1].1;

    assert_eq!(github["bindings"][0]["webHookType"], "github");
    assert_eq!(github["bindings"][0]["authLevel"], "function");
    assert_eq!(
        github["bindings"][1],
        json!({ "type": "http", "direction": "out", "name": "res" })
    );
    assert_eq!(github["entryPoint"], "onPush");
}

#[test]
fn test_http_function_with_queue_output_document() {
    let documents = compile_yaml(SERVICE_YAML).unwrap();
    let bindings = documents[2].1["bindings"].as_array().unwrap().clone();

    // The last event is the queue output, so no HTTP response is added.
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0]["methods"], json!(["post"]));
    assert_eq!(
        bindings[1],
        json!({
            "type": "queue",
            "direction": "out",
            "name": "outputItem",
            "queueName": "orders",
            "connection": "AzureWebJobsStorage"
        })
    );
}

#[test]
fn test_timer_function_document() {
    let documents = compile_yaml(SERVICE_YAML).unwrap();
    let nightly = &documents[3].1;

    assert_eq!(nightly["entryPoint"], "cleanup");
    assert_eq!(nightly["scriptFile"], "handler.js");
    assert_eq!(nightly["bindings"].as_array().unwrap().len(), 1);
    assert_eq!(nightly["bindings"][0]["schedule"], "0 0 3 * * *");
}

#[test]
fn test_binding_keys_start_with_type_and_direction() {
    let service = parse_service(SERVICE_YAML).unwrap();
    let compiled = compile(&service, bundled_index().unwrap()).unwrap();
    let text = serialize(&compiled[2].config).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    for binding in value["bindings"].as_array().unwrap() {
        let keys: Vec<&String> = binding.as_object().unwrap().keys().collect();
        assert_eq!(keys[0], "type");
        assert_eq!(keys[1], "direction");
    }
}

#[test]
fn test_forwarded_unknown_settings() {
    let yaml = r#"
custom:
  azureBindings:
    unknownSettings: forward
    scriptExtension: ts
functions:
  hello:
    handler: src/hello.run
    events:
      - http: true
        x-azure-settings:
          authLevel: admin
          cors: strict
"#;

    let documents = compile_yaml(yaml).unwrap();
    let trigger = &documents[0].1["bindings"][0];
    assert_eq!(trigger["authLevel"], "admin");
    assert_eq!(trigger["cors"], "strict");
    assert_eq!(documents[0].1["scriptFile"], "src/hello.ts");
}

#[test]
fn test_unsupported_binding_fails_compilation() {
    let yaml = r#"
functions:
  hello:
    handler: hello.run
    events:
      - http: true
      - fax: true
"#;

    let error = compile_yaml(yaml).unwrap_err();
    assert!(matches!(
        error.binding_error(),
        Some(BindingError::UnsupportedBinding { binding_type, .. }) if binding_type == "fax"
    ));
    assert!(error.to_string().contains("hello"));
}

#[test]
fn test_bidirectional_kind_without_matching_direction() {
    let yaml = r#"
functions:
  archive:
    handler: archive.run
    events:
      - queue: uploads
      - queue: done
        x-azure-settings:
          direction: in
"#;

    let error = compile_yaml(yaml).unwrap_err();
    assert_eq!(
        error.binding_error(),
        Some(&BindingError::UnsupportedBinding {
            binding_type: "queue".to_string(),
            direction: Some("in".to_string()),
        })
    );
}

#[test]
fn test_table_input_redirected_by_direction() {
    let yaml = r#"
functions:
  lookup:
    handler: lookup.run
    events:
      - queue: lookups
      - table: true
        x-azure-settings:
          direction: in
          take: 10
          filter: "PartitionKey eq 'emea'"
"#;

    let documents = compile_yaml(yaml).unwrap();
    let table = &documents[0].1["bindings"][1];
    assert_eq!(
        *table,
        json!({
            "type": "table",
            "direction": "in",
            "name": "inputTable",
            "tableName": "person",
            "take": 10,
            "filter": "PartitionKey eq 'emea'",
            "connection": "AzureWebJobsStorage"
        })
    );

    // Without the override the type lookup lands on the output entry, which
    // has no `take` setting.
    let yaml = yaml.replace("          direction: in\n", "");
    let documents = compile_yaml(&yaml).unwrap();
    let table = &documents[0].1["bindings"][1];
    assert_eq!(table["direction"], "out");
    assert_eq!(table["name"], "outputTable");
    assert!(table.get("take").is_none());
}

#[test]
fn test_custom_catalog_direction_redirect() {
    let index = parse_catalog(
        r#"{
            "bindings": [
                {
                    "type": "tickTrigger",
                    "displayName": "$tickTrigger_displayName",
                    "settings": []
                },
                {
                    "type": "cache",
                    "displayName": "$cacheIn_displayName",
                    "settings": [
                        { "name": "name", "value": "string", "required": true,
                          "defaultValue": "cached" },
                        { "name": "key", "value": "string", "required": true, "defaultValue": "k" }
                    ]
                },
                {
                    "type": "cache",
                    "displayName": "$cacheOut_displayName",
                    "settings": [
                        { "name": "name", "value": "string", "required": true,
                          "defaultValue": "$return" },
                        { "name": "ttl", "value": "string", "required": true, "defaultValue": "60" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let service = parse_service(
        r#"
functions:
  warm:
    handler: warm.run
    events:
      - tick: true
      - cache: true
      - cache: true
        x-azure-settings:
          direction: out
          key: ignored
"#,
    )
    .unwrap();

    let metadata =
        function_metadata("warm", &index, &service, &CompilerOptions::default()).unwrap();
    let read = &metadata.bindings[1];
    let write = &metadata.bindings[2];

    assert_eq!(read.direction, "out");
    assert_eq!(read.get("key"), Some(&json!("k")));

    assert_eq!(write.binding_type, "cache");
    assert_eq!(write.direction, "out");
    assert_eq!(write.get("name"), Some(&json!("$return")));
    assert_eq!(write.get("ttl"), Some(&json!("60")));
    assert!(write.get("key").is_none());
}

#[test]
fn test_custom_catalog() {
    let index = parse_catalog(
        r#"{
            "bindings": [
                {
                    "type": "pingTrigger",
                    "displayName": "$pingTrigger_displayName",
                    "direction": "trigger",
                    "settings": [
                        { "name": "name", "value": "string", "defaultValue": "ping",
                          "required": true },
                        { "name": "interval", "value": "int", "required": true }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let service = parse_service(
        r#"
functions:
  pinger:
    handler: pinger.run
    events:
      - ping: true
        x-azure-settings:
          interval: 30
"#,
    )
    .unwrap();

    let metadata =
        function_metadata("pinger", &index, &service, &CompilerOptions::default()).unwrap();
    assert_eq!(metadata.bindings.len(), 1);
    assert_eq!(metadata.bindings[0].binding_type, "pingTrigger");
    assert_eq!(metadata.bindings[0].direction, "in");
    assert_eq!(metadata.bindings[0].get("name"), Some(&json!("ping")));
    assert_eq!(metadata.bindings[0].get("interval"), Some(&json!(30)));
    assert_eq!(service.function_names(), vec!["pinger"]);
}

#[test]
fn test_validate_then_compile() {
    let value: Value = json!({
        "functions": {
            "hello": { "handler": "hello.run", "events": [ { "http": true } ] }
        }
    });
    validate_service(&value).unwrap();

    let invalid = json!({
        "functions": {
            "hello": { "handler": "", "events": [ { "http": true, "queue": "x" } ] }
        }
    });
    let error = validate_service(&invalid).unwrap_err();
    assert!(matches!(error, CompilerError::Validation(_)));
    assert!(error.to_string().contains("/functions/hello"));
}
