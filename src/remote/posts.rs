use super::*;

impl ApiClient {
    pub fn list_posts(&self, query: &ListQuery) -> Result<ListEnvelope<Post>> {
        let resp = self
            .client
            .get(self.url("/api/posts"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .query(&query.params())
            .send()
            .context("list posts request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("admin endpoint not found (check the configured base url)");
        }

        let page: ListEnvelope<Post> = self
            .ensure_ok(resp, "list posts")?
            .json()
            .context("parse posts page")?;
        Ok(page)
    }

    pub fn create_post(&self, input: &PostInput) -> Result<Post> {
        let resp = self
            .client
            .post(self.url("/api/posts"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(input)
            .send()
            .context("create post request")?;

        let post: Post = self
            .ensure_ok(resp, "create post")?
            .json()
            .context("parse created post")?;
        Ok(post)
    }

    pub fn update_post(&self, id: &str, input: &PostInput) -> Result<Post> {
        let resp = self
            .client
            .put(self.url(&format!("/api/posts/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(input)
            .send()
            .context("update post request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("post {} not found", id);
        }

        let post: Post = self
            .ensure_ok(resp, "update post")?
            .json()
            .context("parse updated post")?;
        Ok(post)
    }

    pub fn delete_post(&self, id: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/posts/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("delete post request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("post {} not found", id);
        }

        self.ensure_ok(resp, "delete post")?;
        Ok(())
    }
}
