impl super::Command {
    /// Creates every recipe in order, stopping at the first invalid one.
    pub async fn import(
        &self,
        inputs: Vec<super::CreateInput>,
        request_by: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<String>> {
        let request_by = request_by.into();
        let mut ids = Vec::with_capacity(inputs.len());

        for input in inputs {
            let title = input.title.to_owned();
            let id = self.create(input, &request_by).await.inspect_err(|e| {
                tracing::warn!(title, "recipe import stopped: {e}");
            })?;
            ids.push(id);
        }

        Ok(ids)
    }
}
