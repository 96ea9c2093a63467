use crate::{
    libs::{data_storage::DataStorage, messages::Message, state::AppState},
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut state = AppState::load(DataStorage::new())?;
    if state.user().is_none() {
        msg_info!(Message::NotLoggedIn);
        return Ok(());
    }

    state.logout()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
