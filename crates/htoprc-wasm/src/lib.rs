//! WASM bindings for htoprc-core.
//!
//! Exposes `parse`, `serialize` and `score` as `#[wasm_bindgen]` functions for
//! the web front end. Structured values cross the boundary as JSON strings,
//! using the camelCase field names of the core's serde derives.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p htoprc-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/htoprc-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/htoprc_wasm.wasm
//! ```

use htoprc_core::{Configuration, SerializeOptions};
use wasm_bindgen::prelude::*;

/// Parse htoprc text and return the full `ParseResult` as JSON.
///
/// Parsing itself never fails. The `Result` only carries a JSON encoding
/// failure, thrown to JS as an error string.
#[wasm_bindgen]
pub fn parse(text: &str) -> std::result::Result<String, JsValue> {
    parse_json(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Serialize a JSON `Configuration` back to htoprc text.
///
/// `options_json` may be empty or a partial object such as
/// `{"onlyNonDefaults":true}`; missing options take their defaults.
/// Throws a JS error if either argument is not valid JSON for its type.
#[wasm_bindgen]
pub fn serialize(config_json: &str, options_json: &str) -> std::result::Result<String, JsValue> {
    serialize_json(config_json, options_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Customization score of htoprc text.
#[wasm_bindgen]
pub fn score(text: &str) -> u32 {
    htoprc_core::parse(text).score
}

fn parse_json(text: &str) -> serde_json::Result<String> {
    serde_json::to_string(&htoprc_core::parse(text))
}

fn serialize_json(config_json: &str, options_json: &str) -> serde_json::Result<String> {
    let config: Configuration = serde_json::from_str(config_json)?;
    let options: SerializeOptions = if options_json.trim().is_empty() {
        SerializeOptions::default()
    } else {
        serde_json::from_str(options_json)?
    };
    Ok(htoprc_core::serialize(&config, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_shape() {
        let json = parse_json("color_scheme=5\nfoo=bar").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["config"]["colorScheme"], 5);
        assert_eq!(value["config"]["unknownOptions"]["foo"], "bar");
        assert_eq!(value["score"], 10);
    }

    #[test]
    fn parse_then_serialize_through_json() {
        let text = "tree_view=1\nleft_meters=CPU\nscreen:Main=PID\n.sort_key=PID\nfoo=bar\n";
        let result: serde_json::Value =
            serde_json::from_str(&parse_json(text).unwrap()).unwrap();
        let config_json = result["config"].to_string();
        let out = serialize_json(&config_json, r#"{"onlyNonDefaults":true}"#).unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn parse_json_decodes_to_core_result() {
        let text = "config_reader_min_version=2\nleft_meters=CPU Memory\nmystery=1";
        let decoded: htoprc_core::ParseResult =
            serde_json::from_str(&parse_json(text).unwrap()).unwrap();
        assert_eq!(decoded, htoprc_core::parse(text));
        assert!(decoded.config.left_meters.is_empty());
        assert_eq!(decoded.config.legacy_meters.get("left_meters"), Some("CPU Memory"));
    }

    #[test]
    fn partial_config_json_uses_defaults() {
        let out = serialize_json(r#"{"delay":30}"#, "").unwrap();
        assert!(out.contains("delay=30\n"));
        assert!(out.contains("hide_kernel_threads=1\n"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(serialize_json("not json", "").is_err());
        assert!(serialize_json("{}", "[1,2]").is_err());
    }

    #[test]
    fn score_matches_core() {
        assert_eq!(score("color_scheme=1\ntree_view=1"), 15);
    }
}
