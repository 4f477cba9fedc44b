//! Redaction traversal for map containers (keys and values).

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::redaction::{
    redact::{Kind, RedactableMapper},
    traits::RedactableWithMapper,
};

impl<K, V, S> RedactableWithMapper for HashMap<K, V, S>
where
    K: RedactableWithMapper + Hash + Eq,
    V: RedactableWithMapper,
    S: BuildHasher + Clone,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Map, std::any::type_name::<Self>());
        // NOTE: Redacted keys can collide; the later insertion wins.
        let hasher = self.hasher().clone();
        let mut result = HashMap::with_capacity_and_hasher(self.len(), hasher);
        result.extend(
            self.into_iter()
                .map(|(k, v)| (k.redact_with(mapper), v.redact_with(mapper))),
        );
        result
    }
}

impl<K, V> RedactableWithMapper for BTreeMap<K, V>
where
    K: RedactableWithMapper + Ord,
    V: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Map, std::any::type_name::<Self>());
        // NOTE: Entries are visited in key order, so on collision the entry
        // under the greatest original key wins.
        self.into_iter()
            .map(|(k, v)| (k.redact_with(mapper), v.redact_with(mapper)))
            .collect()
    }
}
