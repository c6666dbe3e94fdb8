//! Tabulated unit-edge coordinates for solids without a generating construction.
//! Centered at the origin.

// J84: V 8, E 18, F 12
pub(super) const SNUB_DISPHENOID: [[f64; 3]; 8] = [
    [0.644584273224, 0.205561565853, 0.000000000000],
    [-0.644584273224, 0.205561565853, 0.000000000000],
    [0.000000000000, -0.205561565853, 0.644584273224],
    [0.000000000000, -0.205561565853, -0.644584273224],
    [0.500000000000, -0.783930924233, 0.000000000000],
    [-0.500000000000, -0.783930924233, 0.000000000000],
    [0.000000000000, 0.783930924233, 0.500000000000],
    [0.000000000000, 0.783930924233, -0.500000000000],
];
// J85: V 16, E 40, F 26
pub(super) const SNUB_SQUARE_ANTIPRISM: [[f64; 3]; 16] = [
    [0.707106781187, 0.000000000000, 0.676868509031],
    [0.000000000000, 0.707106781187, 0.676868509031],
    [-0.707106781187, 0.000000000000, 0.676868509031],
    [0.000000000000, -0.707106781187, 0.676868509031],
    [0.857865868455, 0.857865868455, 0.185607021282],
    [-0.857865868455, 0.857865868455, 0.185607021282],
    [-0.857865868455, -0.857865868455, 0.185607021282],
    [0.857865868455, -0.857865868455, 0.185607021282],
    [0.000000000000, 1.213205545866, -0.185607021282],
    [-1.213205545866, 0.000000000000, -0.185607021282],
    [0.000000000000, -1.213205545866, -0.185607021282],
    [1.213205545866, 0.000000000000, -0.185607021282],
    [0.500000000000, 0.500000000000, -0.676868509031],
    [-0.500000000000, 0.500000000000, -0.676868509031],
    [-0.500000000000, -0.500000000000, -0.676868509031],
    [0.500000000000, -0.500000000000, -0.676868509031],
];
// J86: V 10, E 22, F 14
pub(super) const SPHENOCORONA: [[f64; 3]; 10] = [
    [0.000000000000, 0.500000000000, 0.663041836364],
    [0.000000000000, -0.500000000000, 0.663041836364],
    [0.852726942846, 0.500000000000, 0.140684907681],
    [-0.852726942846, 0.500000000000, 0.140684907681],
    [0.852726942846, -0.500000000000, 0.140684907681],
    [-0.852726942846, -0.500000000000, 0.140684907681],
    [0.000000000000, 0.789427626661, -0.294158063827],
    [0.000000000000, -0.789427626661, -0.294158063827],
    [0.500000000000, 0.000000000000, -0.650253587899],
    [-0.500000000000, 0.000000000000, -0.650253587899],
];
// J87: V 11, E 26, F 17
pub(super) const AUGMENTED_SPHENOCORONA: [[f64; 3]; 11] = [
    [-0.072338690718, 0.500000000000, 0.571693438563],
    [-0.072338690718, -0.500000000000, 0.571693438563],
    [0.780388252129, 0.500000000000, 0.049336509880],
    [-0.925065633564, 0.500000000000, 0.049336509880],
    [0.780388252129, -0.500000000000, 0.049336509880],
    [-0.925065633564, -0.500000000000, 0.049336509880],
    [-0.072338690718, 0.789427626661, -0.385506461627],
    [-0.072338690718, -0.789427626661, -0.385506461627],
    [0.427661309282, 0.000000000000, -0.741601985700],
    [-0.572338690718, 0.000000000000, -0.741601985700],
    [0.723386907177, 0.000000000000, 0.913483978009],
];
// J88: V 12, E 28, F 18
pub(super) const SPHENOMEGACORONA: [[f64; 3]; 12] = [
    [-0.411295182358, 0.476964880507, 0.818180633297],
    [-0.077773167267, -0.460150700137, 0.921027383190],
    [0.343319847228, 0.676947246128, 0.193230066801],
    [0.676841862319, -0.260168334516, 0.296076816694],
    [-0.730640996817, 0.262017949916, -0.104758187979],
    [-0.397118981725, -0.675097630728, -0.001911438085],
    [-0.504136367073, 1.205034727084, 0.138993757006],
    [0.351749388158, -1.199795659475, 0.402919567665],
    [-0.116670598373, 0.795203291261, -0.686783738629],
    [0.657644061293, 0.167361071835, -0.607720755299],
    [-0.245400537528, -0.181534013041, -0.858285462088],
    [0.453480672142, -0.806782828835, -0.510968642573],
];
// J89: V 14, E 33, F 21
pub(super) const HEBESPHENOMEGACORONA: [[f64; 3]; 14] = [
    [-0.751392853454, 0.462413055091, 0.019913949897],
    [-0.358045041267, 0.467726121791, 0.939288340432],
    [0.623411187533, 0.520245278130, 0.754937020483],
    [0.655710765477, 0.537709224985, -0.244388626053],
    [-0.700927855515, -0.536187468638, 0.004093773165],
    [-0.307580043329, -0.530874401938, 0.923468163699],
    [0.673876185471, -0.478355245599, 0.739116843751],
    [0.706175763415, -0.460891298744, -0.260208802785],
    [-0.012915701901, 1.098319065078, 0.244134919247],
    [0.098238103083, -1.101190543659, 0.209289523207],
    [-0.668384129986, -0.020280662475, -0.851932554283],
    [-0.177790772502, 0.839053777737, -0.707494064062],
    [0.313072098814, 0.032238493864, -1.036283874231],
    [-0.093447705838, -0.829925395624, -0.733934612467],
];
// J90: V 16, E 38, F 24
pub(super) const DISPHENOCINGULUM: [[f64; 3]; 16] = [
    [0.000000000000, 0.500000000000, 1.104437942080],
    [0.000000000000, -0.500000000000, 1.104437942080],
    [0.767131113983, 0.500000000000, 0.462947603915],
    [0.767131113983, -0.500000000000, 0.462947603915],
    [-0.767131113983, 0.500000000000, 0.462947603915],
    [-0.767131113983, -0.500000000000, 0.462947603915],
    [0.000000000000, 1.126483147079, 0.325002975950],
    [0.000000000000, -1.126483147079, 0.325002975950],
    [0.500000000000, 0.000000000000, -1.104437942080],
    [-0.500000000000, 0.000000000000, -1.104437942080],
    [0.500000000000, 0.767131113983, -0.462947603915],
    [-0.500000000000, 0.767131113983, -0.462947603915],
    [0.500000000000, -0.767131113983, -0.462947603915],
    [-0.500000000000, -0.767131113983, -0.462947603915],
    [1.126483147079, 0.000000000000, -0.325002975950],
    [-1.126483147079, 0.000000000000, -0.325002975950],
];
// J91: V 14, E 26, F 14
pub(super) const BILUNABIROTUNDA: [[f64; 3]; 14] = [
    [0.500000000000, 0.500000000000, 0.809016994375],
    [-0.500000000000, 0.500000000000, 0.809016994375],
    [0.500000000000, -0.500000000000, 0.809016994375],
    [-0.500000000000, -0.500000000000, 0.809016994375],
    [0.500000000000, 0.500000000000, -0.809016994375],
    [-0.500000000000, 0.500000000000, -0.809016994375],
    [0.500000000000, -0.500000000000, -0.809016994375],
    [-0.500000000000, -0.500000000000, -0.809016994375],
    [1.309016994375, 0.000000000000, 0.500000000000],
    [-1.309016994375, 0.000000000000, 0.500000000000],
    [1.309016994375, 0.000000000000, -0.500000000000],
    [-1.309016994375, 0.000000000000, -0.500000000000],
    [0.000000000000, 0.809016994375, 0.000000000000],
    [0.000000000000, -0.809016994375, 0.000000000000],
];
// J92: V 18, E 36, F 20
pub(super) const TRIANGULAR_HEBESPHENOROTUNDA: [[f64; 3]; 18] = [
    [1.003159626764, -0.005667675894, -0.654695907339],
    [0.506489998194, 0.862258595260, -0.659519588060],
    [-0.493491035946, 0.866079763443, -0.664349705503],
    [-0.996802441516, 0.001974660470, -0.664356142223],
    [-0.500132812945, -0.865951610684, -0.659532461502],
    [0.499848221195, -0.869772778866, -0.654702344059],
    [1.308352717428, 0.174175969377, 0.280458326286],
    [0.811683088858, 1.042102240531, 0.275634645565],
    [-0.806320212485, 1.048285020527, 0.267819351373],
    [-1.309631618055, 0.184179917555, 0.267812914653],
    [-0.506003277848, -1.220154288902, 0.275617794011],
    [0.493977756292, -1.223975457084, 0.280447911453],
    [1.306490191561, -0.760984905242, -0.073760066207],
    [0.006192222783, 1.511275572370, -0.086388626287],
    [-1.311494143923, -0.750980957063, -0.086405477840],
    [0.496991386451, 0.289146622997, 0.853585309947],
    [-0.502989647689, 0.292967791180, 0.848755192505],
    [-0.006320019118, -0.574958479975, 0.853578873227],
];
