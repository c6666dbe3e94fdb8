//! Fixed name tables.

/// Polygon prefixes by number of sides.
pub(crate) const POLYGON_PREFIXES: [(usize, &str); 7] = [
    (2, "digonal"),
    (3, "triangular"),
    (4, "square"),
    (5, "pentagonal"),
    (6, "hexagonal"),
    (8, "octagonal"),
    (10, "decagonal"),
];

pub(crate) const PLATONIC: [(&str, &str); 5] = [
    ("T", "tetrahedron"),
    ("C", "cube"),
    ("O", "octahedron"),
    ("D", "dodecahedron"),
    ("I", "icosahedron"),
];

pub(crate) const ARCHIMEDEAN: [(&str, &str); 13] = [
    ("tT", "truncated tetrahedron"),
    ("aC", "cuboctahedron"),
    ("tC", "truncated cube"),
    ("tO", "truncated octahedron"),
    ("eC", "rhombicuboctahedron"),
    ("bC", "truncated cuboctahedron"),
    ("sC", "snub cube"),
    ("aD", "icosidodecahedron"),
    ("tD", "truncated dodecahedron"),
    ("tI", "truncated icosahedron"),
    ("eD", "rhombicosidodecahedron"),
    ("bD", "truncated icosidodecahedron"),
    ("sD", "snub dodecahedron"),
];

/// Prism bases with a canonical "<prefix> prism" name (the square prism is the cube).
pub(crate) const PRISM_BASES: [usize; 5] = [3, 5, 6, 8, 10];
/// Antiprism bases with a canonical "<prefix> antiprism" name (the digonal and
/// triangular antiprisms are the tetrahedron and octahedron).
pub(crate) const ANTIPRISM_BASES: [usize; 5] = [4, 5, 6, 8, 10];

/// The 92 Johnson solids; `JOHNSON_SOLIDS[n - 1]` is J<n>.
pub const JOHNSON_SOLIDS: [&str; 92] = [
    "square pyramid",
    "pentagonal pyramid",
    "triangular cupola",
    "square cupola",
    "pentagonal cupola",
    "pentagonal rotunda",
    "elongated triangular pyramid",
    "elongated square pyramid",
    "elongated pentagonal pyramid",
    "gyroelongated square pyramid",
    "gyroelongated pentagonal pyramid",
    "triangular bipyramid",
    "pentagonal bipyramid",
    "elongated triangular bipyramid",
    "elongated square bipyramid",
    "elongated pentagonal bipyramid",
    "gyroelongated square bipyramid",
    "elongated triangular cupola",
    "elongated square cupola",
    "elongated pentagonal cupola",
    "elongated pentagonal rotunda",
    "gyroelongated triangular cupola",
    "gyroelongated square cupola",
    "gyroelongated pentagonal cupola",
    "gyroelongated pentagonal rotunda",
    "gyrobifastigium",
    "triangular orthobicupola",
    "square orthobicupola",
    "square gyrobicupola",
    "pentagonal orthobicupola",
    "pentagonal gyrobicupola",
    "pentagonal orthocupolarotunda",
    "pentagonal gyrocupolarotunda",
    "pentagonal orthobirotunda",
    "elongated triangular orthobicupola",
    "elongated triangular gyrobicupola",
    "elongated square gyrobicupola",
    "elongated pentagonal orthobicupola",
    "elongated pentagonal gyrobicupola",
    "elongated pentagonal orthocupolarotunda",
    "elongated pentagonal gyrocupolarotunda",
    "elongated pentagonal orthobirotunda",
    "elongated pentagonal gyrobirotunda",
    "gyroelongated triangular bicupola",
    "gyroelongated square bicupola",
    "gyroelongated pentagonal bicupola",
    "gyroelongated pentagonal cupolarotunda",
    "gyroelongated pentagonal birotunda",
    "augmented triangular prism",
    "biaugmented triangular prism",
    "triaugmented triangular prism",
    "augmented pentagonal prism",
    "biaugmented pentagonal prism",
    "augmented hexagonal prism",
    "parabiaugmented hexagonal prism",
    "metabiaugmented hexagonal prism",
    "triaugmented hexagonal prism",
    "augmented dodecahedron",
    "parabiaugmented dodecahedron",
    "metabiaugmented dodecahedron",
    "triaugmented dodecahedron",
    "metabidiminished icosahedron",
    "tridiminished icosahedron",
    "augmented tridiminished icosahedron",
    "augmented truncated tetrahedron",
    "augmented truncated cube",
    "biaugmented truncated cube",
    "augmented truncated dodecahedron",
    "parabiaugmented truncated dodecahedron",
    "metabiaugmented truncated dodecahedron",
    "triaugmented truncated dodecahedron",
    "gyrate rhombicosidodecahedron",
    "parabigyrate rhombicosidodecahedron",
    "metabigyrate rhombicosidodecahedron",
    "trigyrate rhombicosidodecahedron",
    "diminished rhombicosidodecahedron",
    "paragyrate diminished rhombicosidodecahedron",
    "metagyrate diminished rhombicosidodecahedron",
    "bigyrate diminished rhombicosidodecahedron",
    "parabidiminished rhombicosidodecahedron",
    "metabidiminished rhombicosidodecahedron",
    "gyrate bidiminished rhombicosidodecahedron",
    "tridiminished rhombicosidodecahedron",
    "snub disphenoid",
    "snub square antiprism",
    "sphenocorona",
    "augmented sphenocorona",
    "sphenomegacorona",
    "hebesphenomegacorona",
    "disphenocingulum",
    "bilunabirotunda",
    "triangular hebesphenorotunda",
];

/// Canonical name -> alternate names.
pub(crate) const ALTERNATE_NAMES: [(&str, &[&str]); 21] = [
    (
        "tetrahedron",
        &["triangular pyramid", "digonal antiprism", "disphenoid"],
    ),
    ("cube", &["square prism"]),
    (
        "octahedron",
        &["tetratetrahedron", "triangular antiprism", "square bipyramid"],
    ),
    (
        "icosahedron",
        &[
            "snub tetrahedron",
            "snub tetratetrahedron",
            "gyroelongated pentagonal bipyramid",
            "snub triangular antiprism",
        ],
    ),
    (
        "cuboctahedron",
        &["rhombitetratetrahedron", "triangular gyrobicupola"],
    ),
    ("truncated octahedron", &["truncated tetratetrahedron"]),
    ("rhombicuboctahedron", &["elongated square orthobicupola"]),
    ("snub cube", &["snub cuboctahedron"]),
    ("icosidodecahedron", &["pentagonal gyrobirotunda"]),
    ("snub dodecahedron", &["snub icosidodecahedron"]),
    ("triangular prism", &["fastigium", "digonal cupola"]),
    ("gyrobifastigium", &["digonal gyrobicupola"]),
    ("pentagonal antiprism", &["parabidiminished icosahedron"]),
    ("gyroelongated pentagonal pyramid", &["diminished icosahedron"]),
    ("square pyramid", &["diminished octahedron"]),
    ("triangular bipyramid", &["augmented tetrahedron"]),
    (
        "elongated square pyramid",
        &["augmented cube", "augmented square prism"],
    ),
    (
        "elongated square bipyramid",
        &["biaugmented cube", "biaugmented square prism"],
    ),
    (
        "elongated square gyrobicupola",
        &["pseudorhombicuboctahedron", "gyrate rhombicuboctahedron"],
    ),
    ("elongated square cupola", &["diminished rhombicuboctahedron"]),
    ("octagonal prism", &["bidiminished rhombicuboctahedron"]),
];
