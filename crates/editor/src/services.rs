use std::sync::Arc;

use quire_theme::ThemeRegistry;

use crate::ids::IdGen;
use crate::msg::MsgSender;
use crate::{Renderer, Shell, Storage};

/// Collaborators shared by every document in a workspace.
#[derive(Clone)]
pub(crate) struct Services {
	pub registry: Arc<ThemeRegistry>,
	pub storage: Arc<dyn Storage>,
	pub shell: Arc<dyn Shell>,
	pub renderer: Arc<dyn Renderer>,
	pub msg_tx: MsgSender,
	pub ids: IdGen,
}
