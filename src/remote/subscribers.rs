use super::*;

impl ApiClient {
    pub fn list_subscribers(&self, query: &ListQuery) -> Result<ListEnvelope<Subscriber>> {
        let resp = self
            .client
            .get(self.url("/api/subscribers"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .query(&query.params())
            .send()
            .context("list subscribers request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("admin endpoint not found (check the configured base url)");
        }

        let page: ListEnvelope<Subscriber> = self
            .ensure_ok(resp, "list subscribers")?
            .json()
            .context("parse subscribers page")?;
        Ok(page)
    }

    pub fn delete_subscriber(&self, id: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/subscribers/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("delete subscriber request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("subscriber {} not found", id);
        }

        self.ensure_ok(resp, "delete subscriber")?;
        Ok(())
    }

    /// Returns the raw export body; the server renders the bytes, this side
    /// only names and writes the file.
    pub fn export_subscribers(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(self.url("/api/subscribers/export"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .query(&[("format", format.as_str())])
            .send()
            .context("export subscribers request")?;

        let bytes = self
            .ensure_ok(resp, "export subscribers")?
            .bytes()
            .context("read export body")?;
        Ok(bytes.to_vec())
    }
}
