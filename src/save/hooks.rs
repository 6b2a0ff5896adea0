//! Pre-save hook registry

use crate::state::FormDocument;

/// A callback run against the draft document before reconciliation
pub type PreSaveHook = Box<dyn FnMut(&mut FormDocument) + Send>;

/// Ordered registry of pre-save hooks.
///
/// Hooks run in registration order and may mutate the draft document in
/// place. They are fire-and-forget: nothing inspects a result and a hook
/// cannot veto the save.
#[derive(Default)]
pub struct PreSaveHooks {
    hooks: Vec<PreSaveHook>,
}

impl PreSaveHooks {
    #[allow(dead_code)]
    pub fn register(&mut self, hook: impl FnMut(&mut FormDocument) + Send + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Run every hook against the draft, in registration order
    pub fn run(&mut self, document: &mut FormDocument) {
        for hook in &mut self.hooks {
            hook(document);
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for PreSaveHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreSaveHooks")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
