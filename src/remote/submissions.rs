use super::*;

impl ApiClient {
    pub fn list_submissions(&self, query: &ListQuery) -> Result<ListEnvelope<Submission>> {
        let resp = self
            .client
            .get(self.url("/api/submissions"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .query(&query.params())
            .send()
            .context("list submissions request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("admin endpoint not found (check the configured base url)");
        }

        let page: ListEnvelope<Submission> = self
            .ensure_ok(resp, "list submissions")?
            .json()
            .context("parse submissions page")?;
        Ok(page)
    }

    pub fn delete_submission(&self, id: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/submissions/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("delete submission request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("submission {} not found", id);
        }

        self.ensure_ok(resp, "delete submission")?;
        Ok(())
    }
}
