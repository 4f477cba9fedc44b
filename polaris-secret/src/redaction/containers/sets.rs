//! Redaction traversal for set containers.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::redaction::{
    redact::{Kind, RedactableMapper},
    traits::RedactableWithMapper,
};

impl<T, S> RedactableWithMapper for HashSet<T, S>
where
    T: RedactableWithMapper + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Set, std::any::type_name::<Self>());
        // NOTE: Redaction can collapse distinct values into equal ones, which may
        // reduce set cardinality (e.g., two secrets both becoming "REDACTED").
        let hasher = self.hasher().clone();
        let mut result = HashSet::with_capacity_and_hasher(self.len(), hasher);
        result.extend(self.into_iter().map(|value| value.redact_with(mapper)));
        result
    }
}

impl<T> RedactableWithMapper for BTreeSet<T>
where
    T: RedactableWithMapper + Ord,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Set, std::any::type_name::<Self>());
        self.into_iter()
            .map(|value| value.redact_with(mapper))
            .collect()
    }
}
