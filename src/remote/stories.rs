use super::*;

impl ApiClient {
    pub fn list_stories(&self, query: &ListQuery) -> Result<ListEnvelope<Story>> {
        let resp = self
            .client
            .get(self.url("/api/stories"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .query(&query.params())
            .send()
            .context("list stories request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("admin endpoint not found (check the configured base url)");
        }

        let page: ListEnvelope<Story> = self
            .ensure_ok(resp, "list stories")?
            .json()
            .context("parse stories page")?;
        Ok(page)
    }

    pub fn create_story(&self, input: &StoryInput) -> Result<Story> {
        let resp = self
            .client
            .post(self.url("/api/stories"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(input)
            .send()
            .context("create story request")?;

        let story: Story = self
            .ensure_ok(resp, "create story")?
            .json()
            .context("parse created story")?;
        Ok(story)
    }

    pub fn update_story(&self, id: &str, input: &StoryInput) -> Result<Story> {
        let resp = self
            .client
            .put(self.url(&format!("/api/stories/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(input)
            .send()
            .context("update story request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("story {} not found", id);
        }

        let story: Story = self
            .ensure_ok(resp, "update story")?
            .json()
            .context("parse updated story")?;
        Ok(story)
    }

    pub fn delete_story(&self, id: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/stories/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("delete story request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("story {} not found", id);
        }

        self.ensure_ok(resp, "delete story")?;
        Ok(())
    }
}
