use axum::response::IntoResponse;

// Undocumented landing route, plain text only.
pub async fn root() -> impl IntoResponse {
    format!(
        "{} {}\nAPI documentation: /api-docs\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::StatusCode};

    #[tokio::test]
    async fn root_is_plain_text_banner() -> anyhow::Result<()> {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let text = String::from_utf8(body.to_vec())?;
        assert!(text.starts_with("helpinghands "));
        assert!(text.contains("/api-docs"));
        Ok(())
    }
}
