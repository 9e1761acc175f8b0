use axum::Json;
use once_cell::sync;
use serde_json::{json, Value};

static DOCUMENT: sync::Lazy<Value> = sync::Lazy::new(|| {
    let customer_ref = json!({ "$ref": "#/components/schemas/Customer" });
    let request_ref = json!({ "$ref": "#/components/schemas/CustomerRequest" });
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" },
    });
    let not_found = json!({
        "description": "Customer not found",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Message" } } },
    });
    let bad_request = json!({
        "description": "Validation failed",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ValidationProblem" } } },
    });
    json!({
        "openapi": "3.0.3",
        "info": { "title": "Customer API", "version": "v1" },
        "paths": {
            "/customers": {
                "get": {
                    "summary": "Get all customers",
                    "operationId": "getCustomers",
                    "responses": {
                        "200": {
                            "description": "List of all customers",
                            "content": { "application/json": { "schema": { "type": "array", "items": customer_ref } } },
                        },
                    },
                },
                "post": {
                    "summary": "Create a new customer",
                    "operationId": "createCustomer",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": request_ref } },
                    },
                    "responses": {
                        "201": {
                            "description": "Created customer",
                            "headers": {
                                "Location": { "schema": { "type": "string" }, "description": "URL of the created customer" },
                            },
                            "content": { "application/json": { "schema": customer_ref } },
                        },
                        "400": bad_request,
                    },
                },
            },
            "/customers/{id}": {
                "get": {
                    "summary": "Get a customer by ID",
                    "operationId": "getCustomer",
                    "parameters": [id_param],
                    "responses": {
                        "200": {
                            "description": "Customer details",
                            "content": { "application/json": { "schema": customer_ref } },
                        },
                        "400": bad_request,
                        "404": not_found,
                    },
                },
                "put": {
                    "summary": "Update an existing customer",
                    "operationId": "updateCustomer",
                    "parameters": [id_param],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": request_ref } },
                    },
                    "responses": {
                        "200": {
                            "description": "Updated customer",
                            "content": { "application/json": { "schema": customer_ref } },
                        },
                        "400": bad_request,
                        "404": not_found,
                    },
                },
                "delete": {
                    "summary": "Delete a customer",
                    "operationId": "deleteCustomer",
                    "parameters": [id_param],
                    "responses": {
                        "204": { "description": "Customer deleted" },
                        "400": bad_request,
                        "404": not_found,
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "Customer": {
                    "type": "object",
                    "required": ["id", "name", "email", "phone", "city"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "email": { "type": "string" },
                        "phone": { "type": "string" },
                        "city": { "type": "string" },
                    },
                },
                "CustomerRequest": {
                    "type": "object",
                    "required": ["name", "email", "phone", "city"],
                    "properties": {
                        "name": { "type": "string" },
                        "email": { "type": "string" },
                        "phone": { "type": "string" },
                        "city": { "type": "string" },
                    },
                },
                "Message": {
                    "type": "object",
                    "properties": { "message": { "type": "string" } },
                },
                "ValidationProblem": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" },
                        "errors": {
                            "type": "object",
                            "additionalProperties": { "type": "array", "items": { "type": "string" } },
                        },
                    },
                },
            },
        },
    })
});

/// OpenAPIドキュメント
pub async fn document() -> Json<Value> {
    Json(DOCUMENT.clone())
}
