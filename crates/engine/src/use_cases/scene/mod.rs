//! Scene sync use cases.

use std::sync::Arc;

mod check_saved;
mod load_scene;
mod save_scene;

pub use check_saved::CheckSceneSaved;
pub use load_scene::LoadScene;
pub use save_scene::SaveScene;

/// Container for scene sync use cases.
pub struct SceneUseCases {
    pub is_saved: Arc<CheckSceneSaved>,
    pub save: Arc<SaveScene>,
    pub load: Arc<LoadScene>,
}

impl SceneUseCases {
    pub fn new(is_saved: Arc<CheckSceneSaved>, save: Arc<SaveScene>, load: Arc<LoadScene>) -> Self {
        Self {
            is_saved,
            save,
            load,
        }
    }
}
