//! Stipple card handler.
//!
//! Every request renders a fresh card. POST bodies may carry
//! `{"color": "#RRGGBB"}` to pick the seed color; anything else gets a
//! random one.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, header},
    response::IntoResponse,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    art::stipple::{self, Stipple},
    color::{self, Palette},
    error::StippleError,
    render,
};

use super::super::state::AppState;

/// Any method, any path - render a card and return it as an `<img>` tag.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<impl IntoResponse, StippleError> {
    let html = handle_request(&state, &method, &body).await?;
    Ok(([(header::CONTENT_TYPE, "text/html")], html))
}

/// Render, persist and wrap one card.
///
/// This is the whole request pipeline without the HTTP framing, for hosts
/// that invoke the handler directly. Returns the HTML body.
pub async fn handle_request(
    state: &AppState,
    method: &Method,
    body: &[u8],
) -> Result<String, StippleError> {
    let requested = if *method == Method::POST {
        requested_color(body)?
    } else {
        None
    };

    let (seed, dots) = state.with_rng(|rng| {
        let seed = requested.unwrap_or_else(|| color::random_color(rng));
        (seed, stipple::plan(rng))
    });

    let palette = Palette::from_seed(&seed);
    tracing::info!(%method, %palette, "rendering card");

    let canvas = Stipple::new(palette).paint(&dots);
    let png = render::encode_png(&canvas)?;

    let id = Uuid::now_v7().to_string();
    state.storage.save(&id, &png).await?;
    tracing::info!(%id, storage = state.storage.name(), bytes = png.len(), "card saved");

    Ok(image_tag(&png))
}

/// Extract the seed color from a POST body.
///
/// The body must be JSON. A `color` member of an object is used verbatim and
/// must be a string; every other JSON value means "pick one at random",
/// except `null`, which is rejected.
fn requested_color(body: &[u8]) -> Result<Option<String>, StippleError> {
    let json: Value = serde_json::from_slice(body)?;
    tracing::debug!(%json, "request body");

    match json {
        Value::Object(map) => match map.get("color") {
            None => Ok(None),
            Some(Value::String(color)) => Ok(Some(color.clone())),
            Some(other) => Err(StippleError::InvalidColor(format!(
                "expected a string, got {}",
                other
            ))),
        },
        Value::Null => Err(StippleError::InvalidColor(
            "request body is null".to_string(),
        )),
        _ => Ok(None),
    }
}

/// `<img>` tag embedding the PNG as a base64 data URI.
pub fn image_tag(png: &[u8]) -> String {
    format!(r#"<img src="data:image/png;base64,{}" />"#, STANDARD.encode(png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_requested_color_from_object() {
        assert_eq!(
            requested_color(br##"{"color":"#00FF00"}"##).unwrap(),
            Some("#00FF00".to_string())
        );
    }

    #[test]
    fn test_requested_color_is_verbatim() {
        assert_eq!(
            requested_color(br#"{"color":"not a color"}"#).unwrap(),
            Some("not a color".to_string())
        );
    }

    #[test]
    fn test_missing_color_is_random() {
        assert_eq!(requested_color(br##"{"colour":"#00FF00"}"##).unwrap(), None);
        assert_eq!(requested_color(b"[1,2,3]").unwrap(), None);
        assert_eq!(requested_color(b"42").unwrap(), None);
    }

    #[test]
    fn test_malformed_body_fails() {
        assert!(matches!(requested_color(b"{color:"), Err(StippleError::Json(_))));
        assert!(matches!(requested_color(b""), Err(StippleError::Json(_))));
    }

    #[test]
    fn test_non_string_color_fails() {
        assert!(matches!(
            requested_color(br#"{"color":255}"#),
            Err(StippleError::InvalidColor(_))
        ));
        assert!(matches!(
            requested_color(b"null"),
            Err(StippleError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_image_tag() {
        assert_eq!(image_tag(b"png"), r#"<img src="data:image/png;base64,cG5n" />"#);
    }
}
