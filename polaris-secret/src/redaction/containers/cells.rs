//! Redaction traversal for cell-like containers.

use std::cell::{Cell, RefCell};

use crate::redaction::{
    redact::{Kind, RedactableMapper},
    traits::RedactableWithMapper,
};

impl<T> RedactableWithMapper for RefCell<T>
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Pointer, std::any::type_name::<Self>());
        RefCell::new(self.into_inner().redact_with(mapper))
    }
}

impl<T> RedactableWithMapper for Cell<T>
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Pointer, std::any::type_name::<Self>());
        Cell::new(self.into_inner().redact_with(mapper))
    }
}
