// SPDX-License-Identifier: Apache-2.0

use crate::error_mapping::{HTTP_ERROR_SCHEMA_REF, HTTP_VALIDATION_ERROR_SCHEMA_REF};
use crate::{API_TITLE, API_VERSION};
use resilience_model::CatalogKind;
use serde_json::{json, Map, Value};

pub const RECORD_SCHEMA_REF: &str = "#/components/schemas/Record";

fn json_content(schema: Value) -> Value {
    json!({"application/json": {"schema": schema}})
}

fn list_operation(kind: CatalogKind, takes_query: bool) -> Value {
    let mut op = json!({
      "summary": format!("List {}", kind.as_str()),
      "operationId": format!("list_{}", kind.as_str()),
      "responses": {
        "200": {
          "description": format!("all {} in definition order", kind.as_str()),
          "content": json_content(json!({"type": "array", "items": {"$ref": RECORD_SCHEMA_REF}}))
        }
      }
    });
    if takes_query {
        op["parameters"] = json!([{
          "name": "query",
          "in": "query",
          "required": false,
          "description": "Accepted for forward compatibility; currently ignored. The full catalog is always returned.",
          "schema": {"type": "string"}
        }]);
    }
    op
}

fn get_operation(kind: CatalogKind) -> Value {
    let param = kind.id_param();
    json!({
      "summary": format!("Get one record from {}", kind.as_str()),
      "operationId": format!("get_{param}"),
      "parameters": [
        {"name": param, "in": "path", "required": true, "schema": {"type": "integer"}}
      ],
      "responses": {
        "200": {"description": "matching record", "content": json_content(json!({"$ref": RECORD_SCHEMA_REF}))},
        "404": {"description": kind.not_found_detail(), "content": json_content(json!({"$ref": HTTP_ERROR_SCHEMA_REF}))},
        "422": {"description": "validation error", "content": json_content(json!({"$ref": HTTP_VALIDATION_ERROR_SCHEMA_REF}))}
      }
    })
}

#[must_use]
pub fn openapi_spec() -> Value {
    let mut paths = Map::new();
    paths.insert(
        "/".to_string(),
        json!({"get": {
          "summary": "Greeting",
          "operationId": "read_root",
          "responses": {"200": {"description": "greeting", "content": json_content(json!({"$ref": "#/components/schemas/RootMessage"}))}}
        }}),
    );
    paths.insert(
        "/healthz".to_string(),
        json!({"get": {"operationId": "healthz", "responses": {"200": {"description": "ok"}}}}),
    );
    paths.insert(
        "/openapi.json".to_string(),
        json!({"get": {"operationId": "openapi", "responses": {"200": {"description": "this document"}}}}),
    );
    for kind in CatalogKind::ALL {
        let takes_query = kind != CatalogKind::Tasks;
        paths.insert(
            format!("/{}", kind.as_str()),
            json!({"get": list_operation(kind, takes_query)}),
        );
        paths.insert(
            format!("/{}/{{{}}}", kind.as_str(), kind.id_param()),
            json!({"get": get_operation(kind)}),
        );
    }

    json!({
      "openapi": "3.0.3",
      "info": {"title": API_TITLE, "version": API_VERSION},
      "paths": Value::Object(paths),
      "components": {
        "schemas": {
          "HTTPError": {
            "type": "object",
            "required": ["detail"],
            "properties": {"detail": {"type": "string"}}
          },
          "HTTPValidationError": {
            "type": "object",
            "required": ["detail"],
            "properties": {
              "detail": {"type": "array", "items": {"$ref": "#/components/schemas/ValidationError"}}
            }
          },
          "Record": {
            "type": "object",
            "required": ["id", "title", "description"],
            "additionalProperties": false,
            "properties": {
              "id": {"type": "integer", "format": "int64"},
              "title": {"type": "string"},
              "description": {"type": "string"}
            }
          },
          "RootMessage": {
            "type": "object",
            "required": ["message"],
            "properties": {"message": {"type": "string"}}
          },
          "ValidationError": {
            "type": "object",
            "required": ["type", "loc", "msg", "input"],
            "properties": {
              "type": {"type": "string"},
              "loc": {"type": "array", "items": {"type": "string"}},
              "msg": {"type": "string"},
              "input": {"type": "string"}
            }
          }
        }
      }
    })
}
