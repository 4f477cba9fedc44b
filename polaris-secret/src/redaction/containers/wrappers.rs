//! Redaction traversal for optional values and pointers.

use std::{rc::Rc, sync::Arc};

use crate::redaction::{
    redact::{Kind, RedactableMapper},
    traits::RedactableWithMapper,
};

// =============================================================================
// Optional values
// =============================================================================

impl<T> RedactableWithMapper for Option<T>
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Optional, std::any::type_name::<Self>());
        self.map(|value| value.redact_with(mapper))
    }

    fn is_nil_or_opaque(&self) -> bool {
        self.is_none()
    }
}

impl<T, E> RedactableWithMapper for Result<T, E>
where
    T: RedactableWithMapper,
    E: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Optional, std::any::type_name::<Self>());
        match self {
            Ok(value) => Ok(value.redact_with(mapper)),
            Err(err) => Err(err.redact_with(mapper)),
        }
    }
}

// =============================================================================
// Pointers (always a fresh allocation)
// =============================================================================

impl<T> RedactableWithMapper for Box<T>
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Pointer, std::any::type_name::<Self>());
        Box::new((*self).redact_with(mapper))
    }
}

impl<T> RedactableWithMapper for Arc<T>
where
    T: RedactableWithMapper + Clone,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Pointer, std::any::type_name::<Self>());
        Arc::new(Arc::unwrap_or_clone(self).redact_with(mapper))
    }
}

impl<T> RedactableWithMapper for Rc<T>
where
    T: RedactableWithMapper + Clone,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Pointer, std::any::type_name::<Self>());
        Rc::new(Rc::unwrap_or_clone(self).redact_with(mapper))
    }
}

// Unsized pointees: string slices are leaves, slices are walked as sequences.

macro_rules! impl_redactable_str_pointer {
    ($pointer:ident) => {
        impl RedactableWithMapper for $pointer<str> {
            fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
                mapper.visit(Kind::Pointer, std::any::type_name::<Self>());
                $pointer::from(&*self)
            }
        }
    };
}

impl_redactable_str_pointer!(Box);
impl_redactable_str_pointer!(Rc);
impl_redactable_str_pointer!(Arc);

impl<T> RedactableWithMapper for Box<[T]>
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Pointer, std::any::type_name::<Self>());
        self.into_vec().redact_with(mapper).into_boxed_slice()
    }
}
