use super::*;

impl ApiClient {
    pub fn list_team(&self, query: &ListQuery) -> Result<ListEnvelope<TeamMember>> {
        let resp = self
            .client
            .get(self.url("/api/team"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .query(&query.params())
            .send()
            .context("list team request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("admin endpoint not found (check the configured base url)");
        }

        let page: ListEnvelope<TeamMember> = self
            .ensure_ok(resp, "list team")?
            .json()
            .context("parse team page")?;
        Ok(page)
    }

    pub fn create_team_member(&self, input: &TeamMemberInput) -> Result<TeamMember> {
        let resp = self
            .client
            .post(self.url("/api/team"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(input)
            .send()
            .context("create team member request")?;

        let member: TeamMember = self
            .ensure_ok(resp, "create team member")?
            .json()
            .context("parse created team member")?;
        Ok(member)
    }

    pub fn update_team_member(&self, id: &str, input: &TeamMemberInput) -> Result<TeamMember> {
        let resp = self
            .client
            .put(self.url(&format!("/api/team/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(input)
            .send()
            .context("update team member request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("team member {} not found", id);
        }

        let member: TeamMember = self
            .ensure_ok(resp, "update team member")?
            .json()
            .context("parse updated team member")?;
        Ok(member)
    }

    pub fn delete_team_member(&self, id: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/team/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("delete team member request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("team member {} not found", id);
        }

        self.ensure_ok(resp, "delete team member")?;
        Ok(())
    }
}
