//! Add-repository form submission

use super::{AddOutcome, RepositoryPrompt, Synchronizer};
use crate::menu::MenuHost;
use crate::repository::check_url;
use crate::source::AppSource;

/// Handle a submitted add-repository form
///
/// Blank input and URLs that are not http(s) are rejected here and never
/// reach the repository set, so every added repository also passes config
/// validation. The prompt is closed whatever the outcome.
pub async fn submit_repository_form<S, H, P>(
    input: &str,
    synchronizer: &mut Synchronizer<S>,
    host: &mut H,
    prompt: &mut P,
) -> AddOutcome
where
    S: AppSource,
    H: MenuHost + ?Sized,
    P: RepositoryPrompt + ?Sized,
{
    let outcome = match check_url(input) {
        Ok(url) => synchronizer.add_repository(&url, host).await,
        Err(e) => {
            tracing::debug!(input = %input, error = %e, "Rejected repository URL");
            AddOutcome::Rejected
        }
    };

    prompt.close();
    outcome
}
