//! `uxa validate <url>` – check a URL without analysing it.

use anyhow::Result;
use uxa_core::AnalysisRequest;

pub fn run_validate(url: &str) -> Result<()> {
    match AnalysisRequest::new(url).validate() {
        Ok(validated) => {
            let id = validated
                .file_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("valid    yes");
            println!("file id  {id}");
            Ok(())
        }
        Err(err) => {
            let notice = err.notice();
            Err(anyhow::Error::new(err).context(notice.to_string()))
        }
    }
}
