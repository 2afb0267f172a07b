use super::*;

impl ApiClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!(
                "unauthorized (token invalid/expired; run `sitbox login --url ... --token ...`)"
            );
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!("forbidden (this token lacks admin access)");
        }
        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            // The API reports failures as {"error": "..."}; fall back to the
            // bare status when the body is something else.
            if let Ok(body) = resp.json::<ApiError>() {
                anyhow::bail!("{} failed: {}", label, body.error);
            }
            anyhow::bail!("{} failed with status {}", label, status);
        }
        Ok(resp)
    }

    pub(super) fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
