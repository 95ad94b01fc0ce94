pub mod formatting;
pub mod wasm_api;
