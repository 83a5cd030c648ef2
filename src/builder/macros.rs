//! Macros that generate status enums, transition enums and entity ids.

/// Shared expansion behind [`status_enum!`] and [`transition_enum!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __wire_enum {
    (
        kind: $kind:literal,
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant
            ),*
        }

        impl $crate::core::WireEnum for $name {
            const KIND: &'static str = $kind;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),*
                }
            }

            fn display_label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::WireEnum::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::UnknownValue;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::core::WireEnum>::parse(s)
            }
        }
    };
}

/// Generate a status enum with its wire names and display labels.
///
/// # Example
///
/// ```
/// use cadence::core::WireEnum;
/// use cadence::status_enum;
///
/// status_enum! {
///     pub enum BookingStatus {
///         Pending = "PENDING" => "Pending",
///         Confirmed = "CONFIRMED" => "Confirmed",
///     }
/// }
///
/// assert_eq!(BookingStatus::Pending.name(), "PENDING");
/// assert_eq!("CONFIRMED".parse::<BookingStatus>(), Ok(BookingStatus::Confirmed));
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal => $label:literal
            ),* $(,)?
        }
    ) => {
        $crate::__wire_enum! {
            kind: "status",
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant = $wire => $label
                ),*
            }
        }

        impl $crate::core::Status for $name {}
    };
}

/// Generate a transition enum with its wire names and display labels.
///
/// # Example
///
/// ```
/// use cadence::core::WireEnum;
/// use cadence::transition_enum;
///
/// transition_enum! {
///     pub enum BookingTransition {
///         Confirm = "CONFIRM" => "Confirm Booking",
///     }
/// }
///
/// assert_eq!(BookingTransition::Confirm.display_label(), "Confirm Booking");
/// ```
#[macro_export]
macro_rules! transition_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal => $label:literal
            ),* $(,)?
        }
    ) => {
        $crate::__wire_enum! {
            kind: "transition",
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant = $wire => $label
                ),*
            }
        }

        impl $crate::core::Transition for $name {}
    };
}

/// Generate a typed UUID key for an entity that owns status records.
///
/// Serialized transparently as the bare UUID.
#[macro_export]
macro_rules! entity_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(uuid::Uuid);

        impl $name {
            pub const fn new(id: uuid::Uuid) -> Self {
                Self(id)
            }

            /// A fresh random id.
            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub const fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl ::std::convert::From<uuid::Uuid> for $name {
            fn from(id: uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl ::std::convert::From<$name> for uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
