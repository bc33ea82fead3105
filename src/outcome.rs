//! The classification capability a record must offer to be stored.

use std::rc::Rc;
use std::sync::Arc;

/// Classification queries for a single test outcome.
///
/// The history store trusts these answers as given. Categories are not
/// required to be mutually exclusive: a record may report itself as more
/// than one of them, or as none.
pub trait Outcome {
    /// Returns true if the record counts as a pass.
    fn is_pass(&self) -> bool;

    /// Returns true if the record counts as a failure.
    fn is_fail(&self) -> bool;

    /// Returns true if the record is a todo.
    fn is_todo(&self) -> bool;

    /// Returns true if the record was skipped.
    fn is_skip(&self) -> bool;
}

macro_rules! forward_outcome {
    ($($ptr:ty),*) => {
        $(
            impl<T: Outcome + ?Sized> Outcome for $ptr {
                fn is_pass(&self) -> bool {
                    (**self).is_pass()
                }

                fn is_fail(&self) -> bool {
                    (**self).is_fail()
                }

                fn is_todo(&self) -> bool {
                    (**self).is_todo()
                }

                fn is_skip(&self) -> bool {
                    (**self).is_skip()
                }
            }
        )*
    };
}

forward_outcome!(&T, Box<T>, Rc<T>, Arc<T>);
