use super::Session;
use crate::{
    libs::{batch::save_draft, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut session = Session::open()?;
    session.state.require_user()?;

    let pending = session.state.pending_rows().len();
    if pending == 0 {
        msg_info!(Message::NoDraftToSave);
        return Ok(());
    }

    msg_print!(Message::SavingDraft(pending));
    let ledger = session.config.ledger();
    let report = save_draft(&session.backend, &mut session.state, &ledger).await?;

    for outcome in &report.outcomes {
        match &outcome.error {
            None => msg_success!(Message::DraftEntrySaved(outcome.farmer.clone())),
            Some(reason) => msg_error!(Message::DraftEntryFailed(outcome.farmer.clone(), reason.clone())),
        }
    }

    if report.is_complete_success() {
        msg_success!(Message::AllLogsSaved(report.succeeded()), true);
    } else {
        View::save_report(&report)?;
        msg_warning!(Message::SomeLogsFailed {
            saved: report.succeeded(),
            failed: report.failed(),
        });
    }
    Ok(())
}
