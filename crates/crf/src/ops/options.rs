//! Typed option sets, one per operation family, and their conversion to the
//! internal record the pair graphs are keyed on.

use crate::mesh::CapKind;
use crate::specs::{Facet, Gyrate, Twist};

/// Internal option record of a pair graph entry. A request admits an entry
/// when every field it sets agrees. `face_type` doubles as the face size that
/// picks the entry when clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Opts {
    pub facet: Option<Facet>,
    pub face_type: Option<usize>,
    pub twist: Option<Twist>,
    pub gyrate: Option<Gyrate>,
}

fn agrees<T: PartialEq>(request: Option<T>, entry: Option<T>) -> bool {
    request.is_none() || request == entry
}

impl Opts {
    pub fn admits(&self, request: &Opts) -> bool {
        agrees(request.facet, self.facet)
            && agrees(request.face_type, self.face_type)
            && agrees(request.twist, self.twist)
            && agrees(request.gyrate, self.gyrate)
    }
}

/// Truncate, rectify, sharpen: which regular solid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FacetOptions {
    pub facet: Option<Facet>,
}

/// Expand, contract: sides of the faces that move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExpandOptions {
    pub face_type: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SnubOptions {
    pub face_type: Option<usize>,
    pub twist: Option<Twist>,
}

/// Gyroelongate: handedness of the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TwistOptions {
    pub twist: Option<Twist>,
}

/// Shorten: whether the caps of the result line up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShortenOptions {
    pub gyrate: Option<Gyrate>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TurnOptions {
    pub twist: Option<Twist>,
    pub gyrate: Option<Gyrate>,
}

/// Augment: the face to build on, the cap to add and its rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AugmentOptions {
    pub face: Option<usize>,
    pub using: Option<CapKind>,
    pub gyrate: Option<Gyrate>,
}

/// Diminish, gyrate: index into the solid's modifiable caps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CapOptions {
    pub cap: Option<usize>,
}

/// Conversion between a public option set and the internal record.
pub(crate) trait OptionSet: Sized {
    fn to_opts(&self) -> Opts;
    fn from_opts(o: &Opts) -> Self;
}

macro_rules! option_set {
    ($($ty:ident { $($field:ident),* }),* $(,)?) => {
        $(impl OptionSet for $ty {
            fn to_opts(&self) -> Opts {
                Opts {
                    $($field: self.$field,)*
                    ..Opts::default()
                }
            }
            fn from_opts(o: &Opts) -> Self {
                $ty { $($field: o.$field),* }
            }
        })*
    };
}

option_set! {
    FacetOptions { facet },
    ExpandOptions { face_type },
    SnubOptions { face_type, twist },
    TwistOptions { twist },
    ShortenOptions { gyrate },
    TurnOptions { twist, gyrate },
}

impl OptionSet for () {
    fn to_opts(&self) -> Opts {
        Opts::default()
    }
    fn from_opts(_: &Opts) -> Self {}
}
