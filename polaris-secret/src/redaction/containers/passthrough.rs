//! Leaf implementations: the secret marker and pass-through scalar types.

use std::{
    borrow::Cow,
    cmp::Ordering,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    path::PathBuf,
    time::{Duration, Instant, SystemTime},
};

use super::impl_redactable_passthrough;
use crate::{
    SecretString,
    redaction::{
        redact::{Kind, RedactableMapper},
        traits::RedactableWithMapper,
    },
};

// =============================================================================
// The secret leaf
// =============================================================================

impl RedactableWithMapper for SecretString {
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Leaf, std::any::type_name::<Self>());
        mapper.map_secret(self)
    }
}

// =============================================================================
// Passthrough implementations (scalars and primitives)
// =============================================================================

impl_redactable_passthrough!(String);
impl_redactable_passthrough!(bool);
impl_redactable_passthrough!(char);

// Signed integers
impl_redactable_passthrough!(i8);
impl_redactable_passthrough!(i16);
impl_redactable_passthrough!(i32);
impl_redactable_passthrough!(i64);
impl_redactable_passthrough!(i128);
impl_redactable_passthrough!(isize);

// Unsigned integers
impl_redactable_passthrough!(u8);
impl_redactable_passthrough!(u16);
impl_redactable_passthrough!(u32);
impl_redactable_passthrough!(u64);
impl_redactable_passthrough!(u128);
impl_redactable_passthrough!(usize);

// Floating point
impl_redactable_passthrough!(f32);
impl_redactable_passthrough!(f64);

// Unit type
impl_redactable_passthrough!(());

// =============================================================================
// NonZero integer passthrough implementations
// =============================================================================

impl_redactable_passthrough!(NonZeroI8);
impl_redactable_passthrough!(NonZeroI16);
impl_redactable_passthrough!(NonZeroI32);
impl_redactable_passthrough!(NonZeroI64);
impl_redactable_passthrough!(NonZeroI128);
impl_redactable_passthrough!(NonZeroIsize);
impl_redactable_passthrough!(NonZeroU8);
impl_redactable_passthrough!(NonZeroU16);
impl_redactable_passthrough!(NonZeroU32);
impl_redactable_passthrough!(NonZeroU64);
impl_redactable_passthrough!(NonZeroU128);
impl_redactable_passthrough!(NonZeroUsize);

// =============================================================================
// Other std passthrough implementations
// =============================================================================

impl_redactable_passthrough!(Duration);
impl_redactable_passthrough!(Instant);
impl_redactable_passthrough!(SystemTime);
impl_redactable_passthrough!(Ordering);
impl_redactable_passthrough!(PathBuf);
impl_redactable_passthrough!(IpAddr);
impl_redactable_passthrough!(Ipv4Addr);
impl_redactable_passthrough!(Ipv6Addr);
impl_redactable_passthrough!(SocketAddr);

impl<T> RedactableWithMapper for PhantomData<T> {
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Leaf, std::any::type_name::<Self>());
        self
    }
}

impl RedactableWithMapper for &str {
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Leaf, std::any::type_name::<Self>());
        self
    }
}

impl RedactableWithMapper for Cow<'_, str> {
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Leaf, std::any::type_name::<Self>());
        self
    }
}

// =============================================================================
// Date/time passthrough implementations (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_passthrough {
    use chrono::{
        DateTime, Duration, FixedOffset, Local, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc,
        Weekday,
    };

    use super::impl_redactable_passthrough;

    impl_redactable_passthrough!(DateTime<Utc>);
    impl_redactable_passthrough!(DateTime<Local>);
    impl_redactable_passthrough!(DateTime<FixedOffset>);
    impl_redactable_passthrough!(NaiveDateTime);
    impl_redactable_passthrough!(NaiveDate);
    impl_redactable_passthrough!(NaiveTime);
    impl_redactable_passthrough!(Duration);
    impl_redactable_passthrough!(Month);
    impl_redactable_passthrough!(Weekday);
}

#[cfg(feature = "time")]
mod time_passthrough {
    use time::{
        Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    };

    use super::impl_redactable_passthrough;

    impl_redactable_passthrough!(OffsetDateTime);
    impl_redactable_passthrough!(PrimitiveDateTime);
    impl_redactable_passthrough!(Date);
    impl_redactable_passthrough!(Time);
    impl_redactable_passthrough!(Duration);
    impl_redactable_passthrough!(UtcOffset);
    impl_redactable_passthrough!(Month);
    impl_redactable_passthrough!(Weekday);
}

// =============================================================================
// UUID passthrough implementation (feature-gated)
// =============================================================================

#[cfg(feature = "uuid")]
mod uuid_passthrough {
    use uuid::Uuid;

    use super::impl_redactable_passthrough;

    impl_redactable_passthrough!(Uuid);
}
