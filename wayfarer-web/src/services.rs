use std::fmt;
use std::rc::Rc;

use shared::{
    DestinationCatalog, DestinationSubmitter, EmptyCatalog, PendingSubmitter,
};

/// External collaborators handed to the views that need them.
#[derive(Clone)]
pub struct Services {
    pub catalog: Rc<dyn DestinationCatalog>,
    pub submitter: Rc<dyn DestinationSubmitter>,
}

impl Services {
    pub fn new(
        catalog: Rc<dyn DestinationCatalog>,
        submitter: Rc<dyn DestinationSubmitter>,
    ) -> Self {
        Self { catalog, submitter }
    }

    /// No data source yet: empty catalog, submissions only logged.
    pub fn placeholder() -> Self {
        Self::new(Rc::new(EmptyCatalog), Rc::new(PendingSubmitter))
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog) && Rc::ptr_eq(&self.submitter, &other.submitter)
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
