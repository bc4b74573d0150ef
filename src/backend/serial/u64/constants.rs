// Generated by tools/gen_constants.py; do not edit by hand.

use crate::backend::serial::curve_models::NielsPoint;
use crate::backend::serial::u64::field::FieldElement56;
use crate::backend::serial::u64::scalar::Scalar64;
use crate::edwards::EdwardsPoint;

/// The order of the decaf448 group, q.
pub(crate) const L: Scalar64 = Scalar64([
    0x2378c292ab5844f3, 0x216cc2728dc58f55, 0xc44edb49aed63690, 0xffffffff7cca23e9,
    0xffffffffffffffff, 0xffffffffffffffff, 0x3fffffffffffffff,
]);

/// `R^2 = (2^448)^2 mod q`, the Montgomery fold constant.
pub(crate) const R2: Scalar64 = Scalar64([
    0xe3539257049b9b60, 0x7af32c4bc1b195d9, 0x0d66de2388ea1859, 0xae17cf725ee4d838,
    0x1a9cc14ba3c47c44, 0x2052bcb7e4d070af, 0x3402a939f823b729,
]);

/// `-q^(-1) mod 2^64`.
pub(crate) const MONTGOMERY_FACTOR: u64 = 0x03bd440fae918bc5;

/// `2^448 - 1 mod q`: recoding adjustment for the width-4 window ladder.
pub(crate) const VARIABLE_BASE_ADJUSTMENT: Scalar64 =
    Scalar64([
        0x721cf5b5529eec33, 0x7a4cf635c8e9c2ab, 0xeec492d944a725bf, 0x000000020cd77058,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]);

/// `2^450 - 1 mod q`: recoding adjustment for the (5, 5, 18) comb.
pub(crate) const BASEPOINT_COMB_ADJUSTMENT: Scalar64 =
    Scalar64([
        0xc873d6d54a7bb0cf, 0xe933d8d723a70aad, 0xbb124b65129c96fd, 0x00000008335dc163,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]);

/// The decaf448 basepoint, in extended coordinates.
pub const ED448_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: FieldElement56([
        0xcccccccccccccc, 0xcccccccccccccc, 0xcccccccccccccc, 0xcccccccccccccc,
        0x66666666666666, 0x66666666666666, 0x66666666666666, 0x66666666666666,
    ]),
    Y: FieldElement56([
        0x7f9ea2801bc47c, 0x29816aa2d9182c, 0x95ba33c5af1eb7, 0x59624723231fec,
        0xc2d5c9f0224975, 0xaff9957afd3fbf, 0xbc5bfa98a605c4, 0x625f4e55a6312d,
    ]),
    Z: FieldElement56([
        0x00000000000000, 0x00000000000000, 0x00000000000000, 0x00000000000000,
        0xcccccccccccccc, 0xcccccccccccccc, 0xcccccccccccccc, 0xcccccccccccccc,
    ]),
    T: FieldElement56([
        0x830678b0146737, 0x1b38e02990b3a9, 0x717ee0b5ce7669, 0xb5ae2ac414a137,
        0x610987782ce936, 0x817e356057b80c, 0x73e83112022199, 0x8a91ee4df63883,
    ]),
};

/// Comb table of the basepoint: 5 combs x 16 entries, teeth 5, spacing 18.
pub(crate) const BASEPOINT_COMB_TABLE: [NielsPoint; 80] = [
    NielsPoint {
        y_minus_x: FieldElement56([
            0x33c4f9dc990b33, 0xc291cb1ceb55c3, 0x2ae3f58ade88b2, 0x6b1f9f11395474,
            0x2ded6e4b27ff7c, 0x41012ed4aa10e1, 0x3c22d20a36bae7, 0x1f584eed472b19,
        ]),
        y_plus_x: FieldElement56([
            0xe614a9f7278dc5, 0x2e454ad04c5124, 0xd8f58cee1436f3, 0xc83ed46e4180ec,
            0xa41e93274a38fa, 0xc1e7e53257771e, 0x43e0ff03c0392f, 0x2c7c6405ce61df,
        ]),
        td: FieldElement56([
            0xc3514779ee6f60, 0x1574c873b20c2b, 0x4cd6a46a5a5e65, 0x59a068aeb4204a,
            0x4c610458bc354d, 0xe94567479d02d2, 0xfeaf77ed118e28, 0xf58a8bf115eeb5,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x1430f149b607dc, 0xe992ccd16715fc, 0xa62209b0a32a09, 0xb889cedc26b8e4,
            0x59bf9a3ac109cf, 0x6871bb3b7feac2, 0xf4a4d5fd9a0e6b, 0xb95db460cd69a5,
        ]),
        y_plus_x: FieldElement56([
            0x46110878fcb20f, 0xdf43db21cc6f32, 0xffdde9f4516644, 0x519917791686b9,
            0xb72b441fd34473, 0x8d45684cb1c72b, 0x15181370fc17a5, 0xa456d1307f74d3,
        ]),
        td: FieldElement56([
            0x36304418bda702, 0x7bc56861561558, 0xf344bc8e30416f, 0xa64537080f59d7,
            0xb4c20077d00ace, 0xee79620b26f8cc, 0xa6a558e0b5403d, 0x8f1d2c766f3d19,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x21dfef3f5fe8cc, 0x38c659ed1dbd68, 0x58ded9bcebe283, 0x077bbb094983ee,
            0xb7b484e913d70c, 0x63e477a9506397, 0x00b996a6e01629, 0xab68b41f75cd37,
        ]),
        y_plus_x: FieldElement56([
            0xef21c0297d3112, 0x73f89bd27c35b1, 0xec44f9b1ff5e33, 0x6bee51d878f1ee,
            0x1571a4b2aceddb, 0xcd0182d55131d1, 0x26761dbc1844be, 0xf01865af716474,
        ]),
        td: FieldElement56([
            0xa1fbd946403a4e, 0xbe5a4e2d611b05, 0xea4f210888bc6e, 0x43e9b0e0ae50fe,
            0x2abc4f6bd86845, 0xc3ed649c67f663, 0xd4eeb391a520e7, 0x4b19cf1bfe7584,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x2b6f5036a07bdf, 0x4f6940af3e2646, 0x866028f8986799, 0x838b26ccb50415,
            0x10557417f00b11, 0x8a3b6bc447e96b, 0x3de3d035e9e0c9, 0x188fca2b6d4011,
        ]),
        y_plus_x: FieldElement56([
            0x99a75e6f22999e, 0x1f16454c79f659, 0xd776a37fddc812, 0x95fdd63b6b0a78,
            0xd232169366e947, 0x2ea77dd21e9de7, 0xe8c46e85f97a90, 0x358758651f8cd9,
        ]),
        td: FieldElement56([
            0x1ca4038635312b, 0x78dc75c1e01c44, 0x4340f00b3100a4, 0x5e63e36bf6646e,
            0x8e1efd4b624688, 0xa61c2ffb1525e1, 0x72587505a75b81, 0xa8637140d96e78,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x5e93d6fa1118a0, 0x62b43515d381e2, 0x2c42864052e620, 0xaf258bae6ccbd3,
            0x954247094d654d, 0x5db01f5b010810, 0x9c8cf25efa8204, 0x5f73ced3714ef7,
        ]),
        y_plus_x: FieldElement56([
            0x4a7c41ffac8a41, 0x5bf37075b1c20b, 0xc053b570a42408, 0x2bb7e278d328e7,
            0xb2378b63245100, 0x3318bf2a1a368a, 0xf4e3e0bdbe02de, 0x58921e4b1e32f8,
        ]),
        td: FieldElement56([
            0x85f89aff2cf49d, 0xf591ee8480f6f0, 0x378ed518114265, 0xf04293e2a09008,
            0xc58688db9140ed, 0xe9912696399ff1, 0x55bd1b96367413, 0x23a70cf830f999,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xb4b6e09a565d74, 0x95efcf6175aa48, 0x498defe7ae7810, 0x309b684ed26470,
            0x7a8873a91d4e44, 0xea4b3f857eb27a, 0x979b8619d25a9e, 0x721a2770eeb6e9,
        ]),
        y_plus_x: FieldElement56([
            0x1c83772944584e, 0xc1ba881e472bcc, 0xaf2715a0aef13f, 0xbd0360d25610a6,
            0xc42f8b3eebebde, 0xa9e474849788b1, 0xdcd1a1a2efec5c, 0x9480d34c2818c0,
        ]),
        td: FieldElement56([
            0xb422f0f4be195f, 0xe88cfa83bfa2db, 0x9fd60666ea4268, 0x95a458f5e801d0,
            0xb9eee6882081f6, 0xb27edb37604948, 0xa7f67c4d44d8db, 0xdf840ccf290c01,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x810236c68d5b74, 0xd0a1af1872a011, 0x7f23ee29e3801a, 0x9a55a678f8dba4,
            0x65445dcff9be40, 0xf3978789a9abc5, 0x001f010d23f5e8, 0xff80042934b0c5,
        ]),
        y_plus_x: FieldElement56([
            0xc9fed0d47c9103, 0xba73ed9294a043, 0x5cbbc928e652e1, 0x68419e98ee8215,
            0xf63de63786300b, 0x9aa9bb6c19f8aa, 0x66c536b573213f, 0xd2b77a5b2f2450,
        ]),
        td: FieldElement56([
            0xa6749f4b3f9745, 0x3ab85f4180e502, 0x6a7de9b530ed50, 0x50b5353b0441bf,
            0xa093583ac6ede4, 0xc4918ad1406299, 0x0f75cf2a353a2b, 0x1c6644a0683a56,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x8bba5fbf63f599, 0x59a3c960c7d63f, 0xce2db75b08b7d9, 0x97e80cb2104171,
            0x9b68be26a140d0, 0x2b9b9954e94c68, 0x023ca8fc411beb, 0xcbc4bcccbada07,
        ]),
        y_plus_x: FieldElement56([
            0xe8694156c09bfe, 0xf6f3a5bd17ad96, 0x98dbed45edad12, 0xedfe2b84921821,
            0x97884330199b67, 0x4aab02685b3e9e, 0x68ac0bd2453c30, 0x167c1c1c87d8f5,
        ]),
        td: FieldElement56([
            0x53c100e77b678d, 0x0f115c400fa96f, 0x5928d3de22afa2, 0xe47cd9bdbdbe96,
            0x597ecfe84abf19, 0x58bb428e4c7a32, 0xdd582f76ecf584, 0xb1211365eccb79,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x4d298d6e691756, 0x775644dfce310b, 0xa861887823ea98, 0xcf0b6014fa6e6f,
            0x5f4e296380826f, 0xbf423392627f90, 0x2893bfc8122f6a, 0x440dbc89bea228,
        ]),
        y_plus_x: FieldElement56([
            0xdbfb9a00a58e68, 0x4468189350d82f, 0xb4b12407ee92c6, 0xe27a7908f73455,
            0xf071170071b5ae, 0x221a5e6ba229dd, 0x1903e3f6a81f83, 0xbe36325402775f,
        ]),
        td: FieldElement56([
            0xacbb4f40a4ab73, 0xd6a82f48fa3366, 0x0a7958fc6faac2, 0x8a4cdd60a7c33c,
            0x5e5587dd8b6f1a, 0xe40f63086a88e8, 0x30940cbbcda0ad, 0x9a42e3dc35c130,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x6400c4cdc6c9c3, 0x1e8c978691083f, 0xad74f01f68e0c5, 0xf7feb0372b5f6a,
            0x2f60d175ade13a, 0x98ec54a221a678, 0xfcfea8a71f244e, 0xdea6660e45ded2,
        ]),
        y_plus_x: FieldElement56([
            0xd37716cad825f1, 0x883870cba9552a, 0x8ef785f5c762e3, 0x6cb253e0469242,
            0x7b8f17fee9d967, 0xa43de6932b52b6, 0x1aca9fe2af783c, 0x8967778ff0b680,
        ]),
        td: FieldElement56([
            0x2585b4aa8d6752, 0xe62da7615a2089, 0x10c1c741f39b68, 0x569bb1eced9f65,
            0xba6d09e4daa724, 0x7d3e20aef281b9, 0xbd7f65aca3ffdc, 0xdea434a50288a8,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xd4620aa5e5bdec, 0x2303c4b9b5d941, 0x3b061f857ebb2a, 0x371f9e856d49fd,
            0x71c36c5335051e, 0x40e4346a4d359f, 0xb31dbd959ec40c, 0xd99353a71bf6de,
        ]),
        y_plus_x: FieldElement56([
            0x7ba92a2489170f, 0xcd356354d31e9c, 0xa60d47406e5430, 0x9c3d5fde8ed877,
            0x079eaa50dd08d1, 0x24674d593ffa5f, 0x5391be9596c53b, 0x856ca8d50acdd9,
        ]),
        td: FieldElement56([
            0x78898adf0f21dd, 0x6e09bfedd8604a, 0xefaf0e0f9bb666, 0xb0f685db8852c3,
            0x94c86ec566b841, 0xe5c2879ba50dbe, 0xa87cd444cff758, 0xd3e26fd47f23df,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xe59ffd40e87788, 0x6431e9755a50af, 0xa03ce700fb580a, 0xad7e70aa3c9b9e,
            0x78970a2b4db503, 0xc800451849637a, 0xe7e6a5b49e123f, 0xe1ed15f77bcb4d,
        ]),
        y_plus_x: FieldElement56([
            0xb82c07fb1854f8, 0x57f654a06fad9f, 0x4c00383250cf92, 0x8b91713d291af6,
            0x2f2521777859b9, 0x533111421f22c8, 0x643da86fab9794, 0xdc7fb0680e3d40,
        ]),
        td: FieldElement56([
            0xbc1d1d1af47f28, 0xebc5501bbd81f0, 0xaa6b5513547aa4, 0x74ed33551343fe,
            0xd2114f6ef7d43b, 0x6335b41d518aeb, 0xebd46919692fb8, 0x52d5d4e3fada95,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xc6eb0d0ebb4874, 0x856a2274119097, 0x380bc7b29e3719, 0xb1ae149f0e424d,
            0x09b41855b9de26, 0x98684013d0f53f, 0x82e8554c38a6ff, 0xe76c18c353743a,
        ]),
        y_plus_x: FieldElement56([
            0xebfc9f489799a4, 0x497535b6980688, 0xfef76499e6a51b, 0x018eedde7a18da,
            0xf435d9e72b69c7, 0x5ab0faa8281675, 0x3232d06e290be8, 0x5473ec8be0286c,
        ]),
        td: FieldElement56([
            0x8da1194e1ab61f, 0x8edb5f89688805, 0xf4970252f851bd, 0x7a46f632b6ad20,
            0x6d2d1c37e9f90a, 0x60dd09353f665f, 0x0a625a80d86657, 0x0f93f6fedd0888,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x31f412f5cacd43, 0xe5afb75dd20e94, 0x1ce24b3452740e, 0x176d6dedf30ff1,
            0x82e22e564fffca, 0x1d56fbe007097f, 0x95b37c851a6918, 0x8ec50ef97f8f4c,
        ]),
        y_plus_x: FieldElement56([
            0x3b019b31992fb4, 0x4f6a2ad1f64c28, 0x8a744134e5c571, 0x0ca33172f9af3f,
            0xd478755a67bb8b, 0x9d1f5c48abb223, 0x4da4d6f12ee901, 0x84f09541f4140d,
        ]),
        td: FieldElement56([
            0x7e2b1c52251f57, 0xcbef37c9380033, 0x37ed652761bceb, 0xf1c2a5dc6dd232,
            0x26e1b90d63ce0b, 0x938d732173a6b8, 0xd439aa45da993f, 0xd356b8deaccef7,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xae1b4c089b2756, 0xe686d2b916fb5f, 0x7ac43ec2437dd8, 0xf7bfdf7e860ed2,
            0x97dbcb8b786dc9, 0xec7a90401c8b2f, 0x425ed017989bdb, 0x444bc9ca6d914d,
        ]),
        y_plus_x: FieldElement56([
            0xed32377f56c67d, 0xc3b6a4de32e4a7, 0x481a36c0dd5d91, 0xbb557d20466ba7,
            0x645f6d3200163e, 0x5eb4c54df7c48c, 0xfd8e3d08f1e3b4, 0x1156353f099147,
        ]),
        td: FieldElement56([
            0xe5e7b83b53ab7f, 0x4e4bed6ca44fc5, 0x08bd7a67c40d4d, 0x9dbec74a4a2f0e,
            0x77df3f4fc2c73f, 0x46b1af5e73ea8d, 0x9f096cb7be8670, 0x3ad0a29929141d,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x25dc2a60643159, 0x1f0d8ff85f95b4, 0xed74a4bc598a73, 0xf30afe6f0574a9,
            0x03788545d4d28c, 0x9dc410ad120ac0, 0x1950947e69961d, 0x1ceb23cb0355b0,
        ]),
        y_plus_x: FieldElement56([
            0x991a1222e9b2e1, 0xbe7583901d7dc7, 0xfd1d0c8169d3da, 0x0fe0a94a68acf9,
            0xb77bd05afc78a2, 0xa84f1697f87ebc, 0x0097cfdb0c2ecb, 0x7d51d70352ed1b,
        ]),
        td: FieldElement56([
            0xee2202ded9f1bd, 0x2fa4fce658976d, 0xe7c15bc9716470, 0x4f7ea99d500369,
            0x4b995a18318376, 0x246c4f8af91911, 0xcc77a07d09dbfe, 0x7906f6f1364be6,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xd95d1c5fcb435a, 0x16d1ed6b5086f9, 0x792aa0b7e54d71, 0x67b65715f1925d,
            0xa219755ec6176b, 0xbc3f026b12c28f, 0x700c897ffeb93e, 0x89b83f6ec50b46,
        ]),
        y_plus_x: FieldElement56([
            0x3c97e6384da36e, 0x423d53eac81a09, 0xb70d68f3cdce35, 0xee7959b354b92c,
            0xf4e9718819c8ca, 0x9349f12acbffe9, 0x5aee7b62cb7da6, 0xd97764154ffc86,
        ]),
        td: FieldElement56([
            0xad9cdb4544b923, 0xd11664c7284061, 0x815ae86b8f910b, 0x5414fb2591c3c6,
            0x94ba83e2d7ef9e, 0x01dbc16599386c, 0xc8721f0493911b, 0xc1be6b463c346c,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xfed3cd80ca2292, 0x15b043a73ca613, 0x0a9fd7bf9be227, 0x3b5e03de2db983,
            0x5af72d46904ef7, 0xc0f1b5c49faa99, 0xdc86fc3bd305e1, 0xc92f08c1cb1797,
        ]),
        y_plus_x: FieldElement56([
            0x79680ce111ed3b, 0x1a1ed82806122c, 0x0c2e7466d15df3, 0x2c407f6f7150fd,
            0xc5e7c96b1b0ce3, 0x9aa44626863ff9, 0x887b8b5b80be42, 0xb6023cec964825,
        ]),
        td: FieldElement56([
            0x1b571efb768f37, 0x9d778487cf5cfd, 0x430e37327ebfd4, 0xa92447e5970a41,
            0xeb13127c0edbac, 0xec61e5aefeaf20, 0x447eebf57d2e5c, 0xf01433e550e558,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xa7527958238159, 0x13ec9537a84cd6, 0x1d7fee7d562525, 0xb9eefa6191d5e5,
            0xdbc97db70bcb8a, 0x481affc7a4d395, 0x6f73d3e70c31bb, 0x183f324ed96a61,
        ]),
        y_plus_x: FieldElement56([
            0x39dd7ce7fc6860, 0xd64f6425653da1, 0x3e037c7f57d0af, 0x63477a06e2bcf2,
            0x1727dbb7ac67e6, 0x49589f5efafe2e, 0xfc0fef2e813d54, 0x8baa5d087fb50d,
        ]),
        td: FieldElement56([
            0xdb04a6264ba838, 0x582b1f9fddc1b3, 0x3ee72e4aaa027f, 0x7d1de938cd0dd5,
            0x32d5d66cf76afa, 0xc9c717c95c1ec2, 0xf27aa11764b8d6, 0x713a482b7ef36e,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x1bf51f7d65cdfd, 0xd14cdafa16a97d, 0x2c38e60fcd10e7, 0xa27446e393efbd,
            0x0b5d8946a71fdd, 0x63df2cde128f2f, 0x6c8679569b1888, 0x59ffc4925d732d,
        ]),
        y_plus_x: FieldElement56([
            0xece96f95f2b66f, 0xece7952813a27b, 0x26fc36592e489e, 0x7157d1a2de0f66,
            0x759dc111d86ddf, 0x12881e5780bb0f, 0xc8ccc83ad29496, 0x12b9bd1929eb71,
        ]),
        td: FieldElement56([
            0xf05ea5df25a20f, 0xcb6224e5b932ce, 0xd3aed52e2718d9, 0xfb89ee0996ce72,
            0x6197045a6e1e80, 0xbcdf20057fc6f9, 0x59bf78b6ae5c2c, 0x49cacb87455db0,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x9696510000d333, 0xec2f788bc04826, 0x0e4d02b1f67ba5, 0x659aa8dace08b6,
            0xd7a38a3a3ae533, 0x8856defa8c746b, 0x4d7a4402d3da1a, 0xea82e06229260f,
        ]),
        y_plus_x: FieldElement56([
            0x6a15bb20f75c0c, 0x79a144027a5d0c, 0xd19116ce0b4d70, 0x59b83bcb0b268e,
            0x5f58f63f16c127, 0x79958318ee2c37, 0xdefbb063d07f82, 0xf1f0b931d2d446,
        ]),
        td: FieldElement56([
            0x34a1b3c3ca2bdd, 0x72077a35bca880, 0x05af4e935c1b8e, 0xa5f1a71e8b7737,
            0x4d3133292cb2e5, 0x0fe2a2dca1c916, 0x24d181b41935bb, 0xd9f54880ca0332,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x6f6fd9baac61d5, 0x2a7710a020a895, 0x9de0db7fc03d4d, 0xcdedcb1875f40b,
            0x050caf9b6b1e22, 0x5e3a6654456ab0, 0x775fdf8c4423d4, 0x28701ea5738b5d,
        ]),
        y_plus_x: FieldElement56([
            0x9ffd90abfeae96, 0xcba3c2b624a516, 0x5ef08bcee46c91, 0xe6fde30afb6185,
            0xf0b4db4f818ce4, 0x6c54f45d2127f5, 0x040125035854c7, 0x372658a3287e13,
        ]),
        td: FieldElement56([
            0x28f8f04e414d54, 0x87037ba56c7694, 0x976b5b4d0ddb59, 0xa4227e6d462421,
            0x4c77c678b4c560, 0x06c9e74fb485a8, 0xc1c138a02d3981, 0x40a19403d6b6b5,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xf19224ebba2aa5, 0x74f89d358e694d, 0xeea486597135ad, 0x81579a4555c7e1,
            0x10b9b872930a9d, 0xf002e87a30ecc0, 0x9b9d66b6de56e2, 0xa3c4f45e8004eb,
        ]),
        y_plus_x: FieldElement56([
            0x45e8dda9400888, 0x2ff12e5fc05db7, 0xa7098d54afe69c, 0xcdbe846a500585,
            0x879c1593ca1882, 0x3f7a7fea76c8b0, 0x2cd73dd0c8e0a1, 0x645d6ce96f51fe,
        ]),
        td: FieldElement56([
            0xd4817c1edc2929, 0xc67cb908be637f, 0xbd6dd1aa6bfe9c, 0xa1803a9fe7795c,
            0x1770d311e2cefb, 0x18054eca0d1c88, 0x4fa667b240f212, 0xf631f7f055a447,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x85e78af7758979, 0x275a4ee1631a3a, 0xd26bc0ed78b683, 0x4f8355ea21064f,
            0xd618e1a32696e5, 0x8d8d7b150e5680, 0xa74cd854b278d2, 0x1dd62702203ea0,
        ]),
        y_plus_x: FieldElement56([
            0xf89335c2a59286, 0xa0f5c905d55141, 0xb41fb836ee9382, 0xe235d51730ca43,
            0xa5cb37b5c0a69a, 0x9b966ffe136c45, 0xcb2ea10bf80ed1, 0xfb2b370b40dc35,
        ]),
        td: FieldElement56([
            0x29782e92b11745, 0x8eadf422f96200, 0x217a39f2cdcaa2, 0x782d1ca9aefd0b,
            0x321c6e47203654, 0x1e72961020101a, 0xb562fa6e6ab16e, 0x05c92274af111a,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x2e788749a865f7, 0x6e4dc3116861ea, 0x9f1428c37276e6, 0xe7d2e0fc1e1226,
            0x3aeebc6b6c45f6, 0x71a8073bf500c9, 0x4b22ad986b530c, 0xf439e63c0d79d4,
        ]),
        y_plus_x: FieldElement56([
            0x6bc3d53011f470, 0x032d6e692b83e8, 0x059722f497cd0b, 0x09b4e6f0c497cc,
            0x58a804b7cce6c0, 0x2b71d3302bbd5d, 0xe2f82a36765fce, 0x8dded99524c703,
        ]),
        td: FieldElement56([
            0xb2fa76ac8b829b, 0x8fe6bf01865590, 0x59df538e389f40, 0x6acd49eeea748a,
            0xab81280b990cfe, 0xc34a54ac57bfe5, 0x3889ce9731cedf, 0x81b71cc1b4654d,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x1b2fc57bf3c738, 0x6a3f918993fb80, 0x26f7a14fdec288, 0x75a2cdccef08db,
            0xd3ecbc9eecdbf1, 0x48c40f06e5bf7f, 0xd63e423009896b, 0x0598bc99c056a8,
        ]),
        y_plus_x: FieldElement56([
            0x2f194eaafa46dc, 0x8e38f57fe87613, 0xdc8e5ae25f4ab2, 0x0a17809575e6bd,
            0xd3ec7923ba366a, 0x3a7e72e0ad75e3, 0x10024b88436e0a, 0xed3c5444b64051,
        ]),
        td: FieldElement56([
            0x7ce03ecbf50cbd, 0x369ba996b992ca, 0x896d4b33a5f7f0, 0x602b5b8536da60,
            0xe1122082ba6d73, 0xc3fbb903ba0d74, 0xd3f8ec55c1daf8, 0x6a8f96ca0f0be1,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x766ae4190ec6d8, 0x65768cabc71380, 0xb902598416cdc2, 0x380021ad38df52,
            0x8f0b89d6551134, 0x4254d4cc62c5a5, 0x0d79f4484b9b94, 0xb516732ae3c50e,
        ]),
        y_plus_x: FieldElement56([
            0x1fb73475c45509, 0xd2b2e5ea43345a, 0xcb3c3842077bd1, 0x29f90ad820946e,
            0x7c11b2380778aa, 0x9e54ece62c1704, 0x4bc60c41ca01c3, 0x4525679a5a0b03,
        ]),
        td: FieldElement56([
            0x39b0422412784c, 0xbf9fe2ee8ce055, 0x63ddb8a4906298, 0xdb48625178a0ea,
            0x9e9012c0fd3c4e, 0xff30c60950d2c4, 0x3b9453f5565977, 0x54dc1d7ff25dfb,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x0b3a37617632b0, 0x597199fe1cfb6c, 0x42a7ccdfeafdd6, 0x4cc9f15ebcea17,
            0xf436e596a6b4a4, 0x168861142df0d8, 0x0753edfec26af5, 0x0c495d7e388116,
        ]),
        y_plus_x: FieldElement56([
            0x17085f4a346148, 0xc7cf7a37f62272, 0x1776e129bc5c30, 0x9955134c9eef2a,
            0x1ba5bdf1df07be, 0xec39497103a55c, 0x6578354fda6cfb, 0x5f02719d4f15ee,
        ]),
        td: FieldElement56([
            0xad46264a269aa2, 0x2b13845e4b9e3c, 0x06a20b68b0d7f4, 0xc271a35ee514ae,
            0x2b67e14a58f4d8, 0xf5065b099a60d6, 0xba6737b90514bc, 0xb6265e7c5b898f,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x0a72d23dcb3f1f, 0xa3737f84011727, 0xf870c0fbbf4a47, 0xa7aadd04b5c9ca,
            0x0c7715c67bd072, 0x015a136afcd74e, 0x80d5caea499634, 0x26b448ec7514b7,
        ]),
        y_plus_x: FieldElement56([
            0xb60167d9e7d065, 0xe60ba0d07381e8, 0x3a4f17b725c2d4, 0x6c19fe176b64fa,
            0x3b57b31af86ccb, 0x21047c286180fd, 0xbdc8fb00c6dbb6, 0xfe4a9f4bab4f3f,
        ]),
        td: FieldElement56([
            0x77003c5e9eee08, 0x6eaa1bdba2f437, 0x7ae297ddfa8d2a, 0xaa8531e1aeb2d6,
            0xce283cc626efdc, 0xefe2f51d153115, 0xdb954c07c84995, 0x2ade92c7e00acf,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x57e7ea35f36dae, 0xf47d7ad15de22e, 0xd757ea4b105115, 0x8311457d579d7e,
            0xb49b75b1edd4eb, 0x81c7ff742fd63a, 0xddda3187433df6, 0x475727d55f9c66,
        ]),
        y_plus_x: FieldElement56([
            0xa6295218dc136a, 0x563b3af0e9c012, 0xd3753b0145db1b, 0x4550389c043dc1,
            0xea94ae27401bdf, 0x2b0b949f2b7956, 0xc63f780ad8e23c, 0xe591c47d6bab15,
        ]),
        td: FieldElement56([
            0xbe93a7d4fa7149, 0xbef825a4d3396a, 0x4c32daa951139b, 0x3f4be7d981a85e,
            0xe866d6ca8642d0, 0xb912bba6f1b2f8, 0xe28ba64c9cf5e1, 0x39504574996955,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x8d6009b26da3f8, 0x898e88ca06b1ca, 0xedb22b2ed7fe62, 0xfbc93516aabe80,
            0x8b4b470c42ce0d, 0xe0032ba7d0dcbb, 0xd76da3a956ecc8, 0x7f20fe74e3852a,
        ]),
        y_plus_x: FieldElement56([
            0x2419222c607674, 0xa7f23af89188b3, 0xad127284e73d1c, 0x8bba582fae1c51,
            0xfc6aa7ca9ecab1, 0x3df5319eb6c2ba, 0x2a05af8a8b199a, 0x4bf8354558407c,
        ]),
        td: FieldElement56([
            0x3182b5cf0f0340, 0x2fd3d8d9d60fc2, 0xb73ffe08bff43d, 0xd3dec97fee6a72,
            0x675aafc6e16949, 0xd27f499c6f0c86, 0xe0578789f3387a, 0xe52031ab49ec2a,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x1ed4dc71fa2523, 0x5d0bff19bf9b5c, 0xc3801cee065a64, 0x1ed0b504323fbf,
            0x03ab9fdcbbc593, 0xdf82070178b8d2, 0xa2bcaa9c251f85, 0xc628a3674bd02e,
        ]),
        y_plus_x: FieldElement56([
            0x6b7a0674f9f8de, 0xa742414e5c7cff, 0x41cbf3c6e13221, 0xe3a64fd207af24,
            0x87c05f15fbe8d1, 0x4c50936d9e8a33, 0x1306ec21042b6d, 0xa4f4137d1141c2,
        ]),
        td: FieldElement56([
            0xf619046dea974f, 0x4c39fedfde6ee7, 0xd593cb9f22afc5, 0x624e10ee9ab4ab,
            0x9c1b40f41869fd, 0x98f2cb44da6d46, 0x2311d093becf31, 0x4d97d1771880ab,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x0d5b4b3da135ab, 0x838f3e5064d81d, 0xd44eb50f6d94ed, 0x08931ab502ac6d,
            0xdebe01ca3d3586, 0x25c206775f0641, 0x5ad4b6ae912763, 0x7e2c318ad8f247,
        ]),
        y_plus_x: FieldElement56([
            0xddbe0750dd1add, 0x4b3c7b885844b8, 0x363e7ecf12f1ae, 0x62e953e6438f9d,
            0x23cc73b076afe9, 0xb09fa083b4da32, 0xc7c3d2456c541d, 0x5b591ec6b694d4,
        ]),
        td: FieldElement56([
            0xd79a91e629d030, 0xad5b50fc20eb72, 0xedd89a222eb1bd, 0x0ddad6fb098ea8,
            0xb8be69a49c90c4, 0x9bbe2d69ecd346, 0xa1def906a95a48, 0xdb8fd6a6d2cca3,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x3fe038eb92f894, 0x0e6da1b72e8e32, 0x3a1411bfcbe0fa, 0xb55d473164a9e4,
            0xb9a775ac2df48d, 0x02ddf350659e21, 0xa279a69eb19cb3, 0xf844eab25cba44,
        ]),
        y_plus_x: FieldElement56([
            0xc41d1f9c1f1ac1, 0x7b2df4e9f19146, 0xb469355fd5ba7a, 0xb5e1965afc852a,
            0x388d5f1e2d8217, 0x22079e4c09ae93, 0x14268acd4ef518, 0xc1dd8d9640464c,
        ]),
        td: FieldElement56([
            0xc7ad952112f3aa, 0x229739f81c017a, 0x08b9222b75a2a8, 0xbd0d6ad469c483,
            0xe344297892a13c, 0xa1cbeb8f435a3d, 0x78e2be1f7a0bec, 0x1ac54f670ba8cd,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x4d51124797c831, 0x8f5ae3750347ad, 0x70ced94c1a0c8e, 0xf6db2043898e64,
            0x0d00c9a5750cd0, 0x0741ec59bad712, 0x3c9d11aab37b7f, 0xa67ba169807714,
        ]),
        y_plus_x: FieldElement56([
            0xadb2c1566e8b8f, 0x96c68a35771a9a, 0x869933356f334a, 0xba9c93459f5962,
            0x9ec73fb6e8ca4b, 0x3c3802c27202e1, 0x31f5b733e0c008, 0xf9058c19611fa9,
        ]),
        td: FieldElement56([
            0xdc70fe7eb5cbde, 0x3cda5bb49331d7, 0xdec9068514f18c, 0xf3537d975b501d,
            0xdd02de725b8e4b, 0x62327200072106, 0x34607e7e266644, 0xebc51a91215cb6,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x00623bf87622c5, 0xa1966fdd069496, 0xc315b7b812f9fc, 0xbdf5efcd128b97,
            0x1d464f532e3e16, 0x3cd94f081bfd7e, 0xed9dae12ce4009, 0x2756f5736eee70,
        ]),
        y_plus_x: FieldElement56([
            0xa5187e6ee7341b, 0xe6d52e82d83b6e, 0xdf3c41323094a7, 0xb3324f444e9de9,
            0x689eb21a35bfe5, 0xf16363becd548d, 0xe187cc98e7f60f, 0x127d9062f0ccab,
        ]),
        td: FieldElement56([
            0xb528e4ce3d61bf, 0x5a03531ed051d6, 0xbbda4aa68d7f12, 0x1810a28e93ccb9,
            0xef4ac525bef536, 0x6dcefdd9f9f364, 0x6e3d9ed78d6381, 0x774bd6ff0713c4,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xf1e26e9762d4a8, 0xd9d74082183414, 0xffec9bd57a0282, 0x0919e128fd497a,
            0xab7ae7d00fe5f8, 0x54dc442851ff68, 0xc9ebeb3b861687, 0x507f7cab8b698f,
        ]),
        y_plus_x: FieldElement56([
            0xc13c5aae3ae341, 0x9c6c9ed98373e7, 0x098f26864577a8, 0x15b886e9488b45,
            0x37692c42aadba5, 0xb83170b8e7791c, 0x1670952ece1b44, 0xfd932a39276da2,
        ]),
        td: FieldElement56([
            0x7e5cda6410cc67, 0xab7f000be9ef84, 0x31b09f82de4167, 0xc003f7b4be2064,
            0xbc2f44effafd2d, 0x13ca0a8a45cd9e, 0x35e70988cff10c, 0x1744f57d827ab7,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xdf76b3328ada72, 0x2e20621604a7c2, 0xf910638a105b09, 0xef4724d96ef2cd,
            0x377d83d6b8a2f7, 0xb4f48805ade324, 0x1cd5da8b152018, 0x45af671a20ca7f,
        ]),
        y_plus_x: FieldElement56([
            0x9ae3b93a56c404, 0x4a410b7a456699, 0x023a619355e6b2, 0x9cdc7297387257,
            0x55b94d4ae70d04, 0x2cbd607f65b005, 0x3208b489697166, 0xea2aa058867370,
        ]),
        td: FieldElement56([
            0x0d62da6711c0cd, 0x4b53ac7a27d523, 0x89cc150fb20e64, 0x55d2c2883154fe,
            0xb5dcfd03448874, 0x6d80dda2a505cb, 0xb57162afb80dc8, 0x7ddb5162431acf,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x1cf640859b02f8, 0x758d1d5d5ce427, 0x763c784ef4604c, 0x5fa81aee205270,
            0xac537bfdfc44cb, 0x4b919bd342d670, 0x238508d9bf4b7a, 0x154888795644f3,
        ]),
        y_plus_x: FieldElement56([
            0xc845923c084294, 0x072419a201bc25, 0x45f408b5f8e669, 0xe9d6a186b74dfe,
            0xe19108c68fa075, 0x17b91d874177b7, 0x2f0ca2c7912c5a, 0x9400aa385a90a2,
        ]),
        td: FieldElement56([
            0x8eeef4feb7de7b, 0x3012ffbb0d4107, 0xcb0d6fe30b99d1, 0xc4b51d598067cb,
            0x3356469016b7ee, 0xaddaf85188542f, 0x4538bdd8de18c1, 0x999dd4f0c59d4f,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xf8ac5cf4705b6a, 0x867d82dcb457e3, 0x7e13ab2ccc2ce9, 0x9ee9a018d3930e,
            0x8370f8ecb42df8, 0x2d9f019add263e, 0x3302385b92d196, 0xa15654536e2c0c,
        ]),
        y_plus_x: FieldElement56([
            0x26ef1614e160af, 0xc023f9edfc9c76, 0xcff090da5f57ba, 0x76db7a66643ae9,
            0x19462f8c646999, 0x8fec00b3854b22, 0xd55041692a0a1c, 0x65db894215ca00,
        ]),
        td: FieldElement56([
            0x56dafc91f5bae3, 0xd5fc6f3c94933e, 0x0d8fdf26f76b0b, 0x726f2ad342c280,
            0x1e2fec8c6d0c46, 0x0fe83ea74ae570, 0x353cec2c128243, 0x46657e1c14bd2c,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xb54850275fe626, 0x53a3fd1ec71140, 0xe3d2d7dbe096fa, 0xe4ac7b595cce4c,
            0x77bad449c0a494, 0xb7c98814afd5b3, 0x57226f58486cf9, 0xb1557154f0cc57,
        ]),
        y_plus_x: FieldElement56([
            0x8cc9cd236315c0, 0x31d9c5b39fda54, 0xa5713ef37e1171, 0x293d5ae2886325,
            0xc4aba3e05015e1, 0x03f35ef78e4fc6, 0x39d6bd3ac1527b, 0x19d7c3afb77106,
        ]),
        td: FieldElement56([
            0x84e9d6ce567a50, 0x52bf5d1f2558ec, 0x920d83bff60ee7, 0xafc160b1d17413,
            0x8ae58837d3e7d1, 0xfd676c8896dba4, 0x004e170540611a, 0xf7ccb8f91f6541,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xdbca4e98a7dcd9, 0xee29cfc78bde99, 0xe4a3b6995f52e9, 0x45d70189ae8096,
            0xfd2a8a3b9b0d1b, 0xaf1793b107d8e1, 0xdbf92cbe4afa20, 0xda60f798e3681d,
        ]),
        y_plus_x: FieldElement56([
            0x4246bfcecc627a, 0x4ba431246c03a4, 0xbd1d101872d497, 0x3b73d3f185ee16,
            0x1feb2e2678c0e3, 0xff13c5a89dec76, 0xed06042e771d8f, 0xa4fd2a897a83dd,
        ]),
        td: FieldElement56([
            0x65b5c41af29a68, 0x21ce9a03a5ef69, 0xb0c0a91cba4f38, 0x08408de2a54743,
            0xbcec1b84f673ae, 0x1b382a3f1e5244, 0xd1c1c24c9afae1, 0x5b7f3d32956904,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x417fa30a7119ed, 0xaf257758419751, 0xd358a487b463d4, 0x89703cc720b00d,
            0xce56314ff7f271, 0x64db171ade62c1, 0x640b36d4a22fed, 0x424eb88696d23f,
        ]),
        y_plus_x: FieldElement56([
            0x4ede34af2813f3, 0xd4a8e11c9e8216, 0x4796d5041de8a5, 0xc4c6b4d21cc987,
            0xe8a433ee07fa1e, 0x55720b5abcc5a1, 0x8873ea9c74b080, 0x5b3fec1ab65d48,
        ]),
        td: FieldElement56([
            0xb81ad88248f13a, 0xf5f69399248294, 0x4be9b33e8cfea6, 0xb56087c018df01,
            0x57e8846bbb6242, 0x6a5db00b65a660, 0x963e3a87daf343, 0xbadfe6dec2140b,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x21ce99e09ebda3, 0xfcbd9f91875ad0, 0x9bbf6b7b7a0b5f, 0x388886a69b1940,
            0x926a56d0f81f12, 0xe12903c3358d46, 0x5dfce4e8e1ce9d, 0x44cfa94e2f7e23,
        ]),
        y_plus_x: FieldElement56([
            0x1bd59c09e982ea, 0xf72daeb937b289, 0x18b76dca908e0e, 0xedb498512384ad,
            0xce0243b6cc9538, 0xf96ff690cb4e70, 0x7c77bf9f673c8d, 0x5bf704c088a528,
        ]),
        td: FieldElement56([
            0x6c2b9d7234cc41, 0x6ad9c2ae2bda7d, 0xb64cdddba701f9, 0x180318c49ac580,
            0xc35d14319f4c95, 0x3a21dc65cd415b, 0x9c474c28e04940, 0xc65114875e57c6,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x7dc52da400336c, 0x1fded1e15b9457, 0x902e00f5568e3a, 0x219bef40456d2d,
            0x5684161fb3dbc9, 0x4a4e9be49a76ea, 0x6e685ae88b78ff, 0x21c42f13042d3c,
        ]),
        y_plus_x: FieldElement56([
            0xfb22bb5fd3ce50, 0x17b48aada7ae54, 0xfd5c44ad19a536, 0x0ccc4e4e55e45c,
            0xfd637d45b4c3f5, 0x38914e023c37cf, 0xac1881d6a8d898, 0x611ed8d3d943a8,
        ]),
        td: FieldElement56([
            0xa91dda62eec2d4, 0xa6b7e64d7b13e9, 0x384086b44c9969, 0x8de118af683239,
            0x08e416fb85d76c, 0x20945ebda9b120, 0x96a7f485e7b172, 0x0fa91c7035f011,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x9df98566a18c6d, 0xcf3a200968f219, 0x44ba60da6d9086, 0xdbc9c0e344da03,
            0x0f9401c4466855, 0xd46a57c5b0a8d1, 0x875a635d7ac7c6, 0xef4a933b7e0ae6,
        ]),
        y_plus_x: FieldElement56([
            0x5e8694077a1535, 0x8bef75f71c8f1d, 0x0a7c1316423511, 0x906e1d70604320,
            0x3fc46c1a2ffbd6, 0xd1d5022e68f360, 0x2515fba37bbf46, 0xca16234e023b44,
        ]),
        td: FieldElement56([
            0x878366a9e0b96f, 0x57a8573ea9e0d8, 0x5ef206ddc3f601, 0x46756a9d1c4eab,
            0xbccf478bb3c12c, 0x1f97ed7f813a3b, 0x1b309582460e1c, 0x26a4f760ecd5cb,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x2922b39ca33eec, 0x90d12a5f3ab194, 0xab60c02fb5f8ed, 0x188d292abba1cf,
            0xe10edec9698f6e, 0x69a4d9934133c8, 0x24aac40e6d3d06, 0x1702c2177661b0,
        ]),
        y_plus_x: FieldElement56([
            0x139078397030bd, 0x0e3c447e859a00, 0x64a5b334c82393, 0xb8aabeb7358093,
            0x020778bb9ae73b, 0x32ee94c7892a18, 0x8215253cb41bda, 0x5e2797593517ae,
        ]),
        td: FieldElement56([
            0x7c89a5a07aa2b5, 0xae492ecae4711d, 0xee921ab74f0844, 0x7842778fc5005f,
            0x6a4d33cb28022c, 0x7b327e4ac0f437, 0x7a9d0366acaf12, 0x5c6544e6c9ae1c,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x19e23f0474b114, 0xeb94c2ad3b437e, 0x6ddb34683b75ac, 0x391f9209b564c6,
            0x083b3bb3bff7aa, 0xeedcd0f6dceefc, 0xb50817f794fe01, 0x36474deaaa75c9,
        ]),
        y_plus_x: FieldElement56([
            0x91868594265aa2, 0x797accae98ca6d, 0x08d8c5f0f8a184, 0xd1f4f1c2b2fe6e,
            0x36783dfb48a006, 0x8c165120503527, 0x25fd780058ce9b, 0x68beb007be7d27,
        ]),
        td: FieldElement56([
            0x2f007755836f3d, 0x4d39f2530acc6b, 0x6b58d7b2699929, 0x4126fdd3185e62,
            0x3aeaac0f32897c, 0x3c0478f4edb66d, 0x72f43ac66a9364, 0x03730da744777a,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x3667bf998406f8, 0x00115c43a12975, 0x1e662f3b20e8fd, 0x19ffa534cb24eb,
            0x016be0dc8efb45, 0xff76a8b26243f5, 0xae20d241a541e3, 0x69bd6af13cd430,
        ]),
        y_plus_x: FieldElement56([
            0x45fdc16487cda3, 0xb2d8e844cf2ed7, 0x612c50e88c1607, 0xa08aabc66c1672,
            0x6031fdcbb24d97, 0x1b639525744b93, 0x4409d62639ab17, 0xa1853d0347ab1d,
        ]),
        td: FieldElement56([
            0x8a5e5a9140a3de, 0x5c18d41653ac12, 0x10321e9d6e8f3d, 0xfbdda016e10aca,
            0x77fb6038c20257, 0xb5438b7a81ed77, 0xdb1dbcb9a8ce83, 0x26734c2c1aabc3,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xb4b53eab6bdb19, 0x9b22d8b43711d0, 0xd948b9d961785d, 0xcb167b6f279ead,
            0x191de3a678e1c9, 0xd9dd9511095c2e, 0xf284324cd43067, 0xed74fa535151dd,
        ]),
        y_plus_x: FieldElement56([
            0x7e32c049b5c477, 0x9d2bfdbd9bcfd8, 0x636e93045938c6, 0x7fde4af7687298,
            0x46a5184fafa5d3, 0x79b1e7f13a359b, 0x875adf1fb927d6, 0x333e21c61bcad2,
        ]),
        td: FieldElement56([
            0xfb7feb08c27472, 0x8a97b55f699c77, 0x6d41820f923b83, 0x6831432f0aa975,
            0xa58ffb263b3955, 0x4f13449a66db38, 0x26fccd22b6d583, 0xa803eb20eeb6c2,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x08ed8ea0ad95be, 0x41d324b9709645, 0xe25412257a19b4, 0x58df9f3423d8d2,
            0xa9ab20def71304, 0x9ae0dbf8ac4a81, 0xc9565977e4392a, 0x3c9269444baf55,
        ]),
        y_plus_x: FieldElement56([
            0x7df6cbb926830b, 0xd336058ae37865, 0x7af47dac696423, 0x48d3011ec64ac8,
            0x6b87666e40049f, 0x36a2e0e51303d7, 0xba319bd79dbc55, 0x3e2737ecc94f53,
        ]),
        td: FieldElement56([
            0x2d69008d9d8d26, 0x092f686d7030a8, 0x1f19e95aa28fec, 0x2150bab1261538,
            0x8c5a941210b26c, 0x9330209036d1e6, 0x62e11ec8e58de7, 0x11c3d11bb9d27f,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x437bce9bccdf9d, 0xe0c8e2f85dc0a3, 0xc91a7073995a19, 0x856ec9fe294559,
            0x9e4b33394b156e, 0xe245b0dc497e5c, 0x6a54e687eeaeff, 0xf1cd1cd00fdb7c,
        ]),
        y_plus_x: FieldElement56([
            0x8132ae5c5d8cd1, 0x121d68324a1d9f, 0xd6be9dafcb8c76, 0x684d9070edf745,
            0x519fbc96d7448e, 0x388182fdc1f27e, 0x0235baed41f158, 0xbf6cf6f1a1796a,
        ]),
        td: FieldElement56([
            0xd523b4b2eb7de6, 0xcf7b525f2c56f5, 0xb9217554f0d1b1, 0xbad2cbd5984a02,
            0x2b4af0fe2b21dd, 0x2492603f310486, 0x73e7b3795b9d32, 0x1e837c89b2bd25,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x7b2743b9a1e01a, 0x7847ffd42688c4, 0x6c7844d610a316, 0xf0cb8b250aa4b0,
            0xa19060143b3ae6, 0x14eb10b77cfd80, 0x0170905729dd06, 0x063b5b9cd72477,
        ]),
        y_plus_x: FieldElement56([
            0xce382dc7993d92, 0x021153e938b4c8, 0x096f7567f48f51, 0x58f81ddfe4b0d5,
            0xcc379a56b355c7, 0x2c760770d3e819, 0xee22d1d26e5a40, 0xde6d93d5b082d7,
        ]),
        td: FieldElement56([
            0xf56e5bd3ad1fa9, 0xe7a09488031815, 0xf7fc3ae69d094a, 0xddad7a7d45a9c2,
            0xbc07fbf167a928, 0x7a5d6137e0479f, 0xa0659eeab60a00, 0x3e068b1342b4f9,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x5b64c6fd65ec97, 0xc1fdd7f877bc7f, 0x0d9cc6c89f841c, 0x5c97b7f1aff9ad,
            0x75e3c61475d47e, 0x1ecb1ba8153011, 0xfe7f1c8d71d40d, 0x3fa9757a229832,
        ]),
        y_plus_x: FieldElement56([
            0xffc5c89d2b0cba, 0xd363d42e3e6fc3, 0x19a1a0118e2e8a, 0xf7baeff48882e1,
            0x1bd5af28c6b514, 0x55476ca2253cb2, 0xd8eb1977e2ddf3, 0xb173b1adb228a1,
        ]),
        td: FieldElement56([
            0x0d346622f528f8, 0x1e1f7497a62227, 0xfff70d2f9af433, 0x2812c6d079ea3c,
            0x6898af56b25d7f, 0xc17c44f1349645, 0x207172ea3eb539, 0x0608e8bd6a263d,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xf11cc8e0e70bcb, 0xe5dc689974e7dd, 0x14e409f9ee5870, 0x826e6689acbd63,
            0x8a6f4e3d895d88, 0xb26a8da41fd4ad, 0x0fb7723f83efd7, 0x9c749db0a5f6c3,
        ]),
        y_plus_x: FieldElement56([
            0x2389319450f9ba, 0x3677f31aa1250a, 0x92c3db642f38cb, 0xf8b64c0dfc9773,
            0xcd49fe3505b795, 0x68105a4090a510, 0xdf0ba2072a8bb6, 0xeb396143afd8be,
        ]),
        td: FieldElement56([
            0x5f2b1304db3200, 0x22507ff7459b86, 0x0f4c1c92b4f0bb, 0xc8cb42c50e0eb9,
            0x4781d1038aad80, 0x2dcf20aa2254af, 0xd9ecda851a93e2, 0x43f6b92eca6cb2,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x468711bd994651, 0x33108fa67561bf, 0x89d760192a54b4, 0xadc433de9f1871,
            0x0467d05f36e050, 0x7847e0f0579f7f, 0xa2314ad320052d, 0xb3a93649f0b243,
        ]),
        y_plus_x: FieldElement56([
            0x67f8f0c4fe26c9, 0x79c4a3cc8f67b9, 0x82b1e62f23550d, 0xf2d409caefd7f5,
            0x80e67dcdb26e81, 0x87ae993ea1f98a, 0xaa108becf61d03, 0x1acf11efb608a3,
        ]),
        td: FieldElement56([
            0x7dda014454af26, 0x0c49fa1b22df7c, 0x5cd4d7e761dc2d, 0x2af81a1a14b368,
            0xa5e57b1cfd7ddf, 0xf90ab3e3a0f738, 0x5cb83734d7bc0f, 0xf608c16abb405a,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x6c59c9ae744185, 0x9fc32f1b4282cd, 0x4d6348ca59b1ac, 0x105376881be067,
            0xaf4096013147dc, 0x4abfb5a5cb3124, 0x0d2a7f8626c354, 0x9c6ed568e07431,
        ]),
        y_plus_x: FieldElement56([
            0xe828333c297f8b, 0x9ef3cf8c3f7e1f, 0xab45f8fff31cb9, 0xc8b4178cb0b013,
            0xd0c50dd3260a3f, 0x97126ac257f5bc, 0x42376cc90c705a, 0x1d96fdb4a1071e,
        ]),
        td: FieldElement56([
            0xabd2bb27611e57, 0xcf99bd1fbbd267, 0x6f7ac78d478cc7, 0xdc9d340dd23fbb,
            0xd3ddd520099c46, 0x9836dbb6a03486, 0xf19de267c36883, 0x20885613349904,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x2809e4bbf1814a, 0xb9e854f9fafb32, 0xd35e67c10f7a67, 0x8f1bcb76e748cf,
            0x4224d9515687d2, 0x5ba0b774e620c4, 0xb5e57db5d54119, 0xe15babe5683282,
        ]),
        y_plus_x: FieldElement56([
            0x832d02369b482c, 0xcba52ff0d93450, 0x3fa9c908d554db, 0x8d1e357b54122f,
            0xabd91c2dc950c6, 0x7eff1df4c0ec69, 0x3f6aeb13fb2d31, 0x002d6179fc5b2c,
        ]),
        td: FieldElement56([
            0xb9361257e36376, 0x49f348e3709d03, 0xdd0a597c455aa7, 0x078ce603320668,
            0x635f64ae3195dc, 0xa4ed450b508288, 0x75b9adb5e1cc1d, 0xfca588167741f2,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xa7efe46a7dbe2f, 0x2f66fd55014fe7, 0x6a428afa1ff026, 0x56caaa9604ab72,
            0x33f3bcd7fac8ae, 0xccb1aa01c86764, 0x158d1edf13bf40, 0x9848ee76fcf3b4,
        ]),
        y_plus_x: FieldElement56([
            0xa9e7730a819691, 0xd9cc73c4992b70, 0xe299bde067de5a, 0x8c314eb705192a,
            0xe7226f17e8a3cc, 0x29dfd956e65a47, 0x53a8e839073b12, 0x6f942b2ab1597e,
        ]),
        td: FieldElement56([
            0xe3c287f132a1c6, 0x6b0db804233a01, 0x2a387902ad889b, 0x490b258b0f24d5,
            0x7f0e0745232a02, 0x0c95c8c52d1dc4, 0x07fb060bcbc40d, 0x2e50bf139dc67d,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x82aeace5f1b144, 0xf68b3108cf4dd3, 0x634af01dde3020, 0x0beab5df5c2355,
            0xe8b790d1b49b0b, 0xe48d15854e36f4, 0x40ab2d95f3db9f, 0x2711c4ed9e899a,
        ]),
        y_plus_x: FieldElement56([
            0x39343746531ebe, 0xc8509d835d429d, 0xe79eceff6b0018, 0x4abfd31e8efce5,
            0x7bbfaaa1e20210, 0xe3be89c193e179, 0x1c420f4c31d585, 0xf414a315bef5ae,
        ]),
        td: FieldElement56([
            0x83d695db66f207, 0x2a2f8ada58aa77, 0x2271eec16b4818, 0x8443a70141f337,
            0xd60ae50640352b, 0x816cee1385490c, 0x6577b21e989cbc, 0xaf2a0d2317b416,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x5fa020cca2450a, 0x491c29db6416d8, 0x37cefe3f9f9a85, 0x3d405230647066,
            0x49e835f0fdbe89, 0xfeb78ac1a0815c, 0x828e4b32dc9724, 0xdb84f2dc8d6fd4,
        ]),
        y_plus_x: FieldElement56([
            0x98cddc8b39549a, 0x6da37e3b05d22c, 0xce633cfd4eb3cb, 0xfda288ef526acd,
            0x25338878c5d30a, 0xf34438c4e5a1b4, 0x584efea7c310f1, 0x41a551f1b660ad,
        ]),
        td: FieldElement56([
            0x2808570429bc85, 0x9d78dbec40c8ac, 0x52b4434bc3a7b4, 0x801b6419fe281c,
            0x8839a68764540a, 0x14ba034f958be4, 0xa31dbb6ec068f7, 0x77bd9bfe8c9cd9,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x7bf562ca768d7c, 0x6c1f3a174e387c, 0xf024b447fee939, 0x7e7af75f01143f,
            0x3adb70b4eed89d, 0xe43544021ad79a, 0x91f7f7042011f6, 0x93c1a1ee3a0ddc,
        ]),
        y_plus_x: FieldElement56([
            0xa0b68ec1eb72d2, 0x2c03235c0d45a0, 0x553627323fe8c5, 0x6186e94b17af94,
            0xa9906196e29f14, 0x25b3aee6567733, 0x7e0dd840080517, 0x18eb5801a4ba93,
        ]),
        td: FieldElement56([
            0x28018fe84095bf, 0x91c0f9db41f3bd, 0x00445dfaca7dba, 0x0603d307e6bdc6,
            0x726c4c840ea4b0, 0x9220d1c741716a, 0xd4918640a03006, 0x54caa25bda1d21,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x938f97e20be973, 0x99141a36aaf306, 0x57b0ca29e545a1, 0x85db571f9fbc13,
            0x8b333c554b4693, 0x43ab6ef3e241cb, 0x54fb20aa1e5c70, 0xbe0ff852760adf,
        ]),
        y_plus_x: FieldElement56([
            0x3973d8938971d6, 0x2aca26fa80c1f5, 0x108af1faa6b513, 0xdaae275d7924e6,
            0x53634ced721308, 0xd2355fe0bbd443, 0x357612b2d22095, 0xf9bb9dd4136cf3,
        ]),
        td: FieldElement56([
            0xd400ed30a1fc5a, 0xe424e0575e6307, 0x36e3986c07b2c6, 0x07960e4d145650,
            0xa643ab823cdc93, 0x26e9ee292c7976, 0x1f9d2555d3fdeb, 0x12c3fb833d437d,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x0050d70c32b31a, 0x1939d576d437b3, 0xd709e598bf9fe6, 0xa885b34bd2ee9e,
            0xdd4b5c08ab1a50, 0x91bebd50b55639, 0xcf79ff64acdbc6, 0x6067a39d826336,
        ]),
        y_plus_x: FieldElement56([
            0x62dd0fb31be374, 0xfcc96b84c8e727, 0x3f64f1375e6ae3, 0x57d9b6dd1af004,
            0xd6a167b1103c7b, 0xdd28f3180fb537, 0x4ff27ad7167128, 0x8934c33461f2ac,
        ]),
        td: FieldElement56([
            0x9a4b8d486fffbc, 0x458102d00ef9b4, 0xf498293b3cfdf0, 0xed2d7b960b1b92,
            0xce3cd6c68fc137, 0x4b60f431eccf99, 0x081efbe9e7e2b8, 0xa36f0ae7981133,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x51207abd179101, 0xfc2a5c20d9c5da, 0xfb9d5f2701b6df, 0x2dd040fdea82b8,
            0xf163b0738442ff, 0xd9736bd68855b8, 0xe0d8e93005e61c, 0xdf5a40b3988570,
        ]),
        y_plus_x: FieldElement56([
            0x06918f5dfce6dc, 0xd4bf1c793c57fb, 0x69a3f649435364, 0xe89a50e5b0cd6e,
            0xb9f6a237e973af, 0x6d4ed8b104e41d, 0x498946a3924cd2, 0xc136ec5ac9d4f7,
        ]),
        td: FieldElement56([
            0xee563d6f53acc9, 0xd465d2b5959acc, 0x6575973bba26c8, 0xc9e4d84f81a1a3,
            0xc3fbc4e8aa468a, 0x48149930eeaa11, 0x8850a6f611000d, 0x6709f6788337f9,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xab13af436bf8f4, 0x0bcf0a0dac8574, 0xd50c864f705045, 0xc40e611debc842,
            0x85010489bd5caa, 0x7c5050acec026f, 0xf67d943c8da6d1, 0xde1da0278074c6,
        ]),
        y_plus_x: FieldElement56([
            0xb373076597455f, 0xe83f1af53ac0f5, 0x41f63c01dc6840, 0x97dea19b0c6f4b,
            0x7f9d63b4c1572c, 0xe692d492d0f5f0, 0xcbcb392e83b4ad, 0x69c0f39ed9b1a8,
        ]),
        td: FieldElement56([
            0x79efcffed8f836, 0x604423802b5504, 0x70a6e294aab7dd, 0x20f75be15e7521,
            0x62827c19bd5414, 0x6738e425c48700, 0xdd37618fde0ffa, 0xbb2d65c01e1c3b,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xe748cd7b5c52f2, 0xea9df883f89cc3, 0x18970df156b6c7, 0xc5a46c2a33a847,
            0xcbde395e32aa09, 0x72474ebb423140, 0xfb00053086a23d, 0x1dafcfe22d4e1f,
        ]),
        y_plus_x: FieldElement56([
            0xc903ee6d825540, 0xadd6c4cf98473e, 0x7636efed4227f1, 0x905124ae55e772,
            0xe6b38fab12ed53, 0x45e132b863fe55, 0x3974662edb366a, 0xb1787052be8208,
        ]),
        td: FieldElement56([
            0x59eb4ff288a383, 0x283876be3388ab, 0xbdd22974a2543b, 0x59eef0fe982d74,
            0x97a5cf63dad778, 0x4bc6002aebc99f, 0xc9a91d6118c690, 0x38364612a527ab,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x40f7e7c5b37bf2, 0x64e4dc81181bba, 0xa8767ae2a366b6, 0x1496b4f90546f2,
            0x2a28493f860441, 0x21f59513049a3a, 0x852d369a8b7ee3, 0xdd2e7d8b7d30a9,
        ]),
        y_plus_x: FieldElement56([
            0x006e34a35d9fbc, 0xeee4e48b2f019a, 0x6b344743003a5f, 0x541d514f04a7e3,
            0xe81f9ee7647455, 0x5e2b916c438f81, 0x116f8137b7eff0, 0x9bd3decc7039d1,
        ]),
        td: FieldElement56([
            0xfa2dd90bcbeef2, 0x507d774710de2a, 0xb585ad10e7e373, 0x41f487e4b4f921,
            0x191c9d8212f81d, 0x1bc55cbdd8d474, 0x17954bdba8827b, 0x04d6d3a991ca44,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x334f5303ea1222, 0xdfb3dbeb0a5d3e, 0x2940d9592335c1, 0x706a7a63e8938a,
            0x5a533558bc4caf, 0x558e33192022a9, 0x970d9faf74c133, 0x2979fcb63493ca,
        ]),
        y_plus_x: FieldElement56([
            0xe38abece3c82ab, 0x5a51f18a2c7a86, 0x9dafa2e86d592e, 0x495a62eb688678,
            0xb79df74c0eb212, 0x23e8cc78b75982, 0x5998cb91075e13, 0x735aa9ba61bc76,
        ]),
        td: FieldElement56([
            0x260857d22419d7, 0x5e0387d77651f0, 0x8e0025ed2eb499, 0xc830b135804c2a,
            0x37f43dbd3a77f6, 0x8a4073d2f7379c, 0x72be0ce503ad58, 0xe6869d130c78be,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x6e9f475cccf2ee, 0x454b9cd506430c, 0x224a4fb79ee479, 0x62e3347ef0b5e2,
            0x34fd2a3512232a, 0xb8b3cb0f457046, 0xeb20165daa38ec, 0x128eebc2d9c0f7,
        ]),
        y_plus_x: FieldElement56([
            0xbfc5fa1e4ea21f, 0xc21d7b6bb892e6, 0xcf043f3acf0291, 0xc13f2f849b3c90,
            0xd1a97ebef10891, 0x61e130a445e7fe, 0x19513fdedbf22b, 0x1d60c813bff841,
        ]),
        td: FieldElement56([
            0xe6a9e38030fdec, 0x1c23597bc14288, 0x97156a46356df1, 0x642048f0daca6a,
            0x3970a6e7955fd4, 0xa511e335e3cfc6, 0x54865756c85e31, 0x465f1ab66a6190,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xc79e0b6d97dfbd, 0x917c71fd2bc6e8, 0xdb7529ccfb63d8, 0xbe5be957f17866,
            0xa9e11fdc2cdac1, 0x7b91a8e1f44443, 0xa3065e4057d80f, 0x4825f5b8d5f6d4,
        ]),
        y_plus_x: FieldElement56([
            0x3e4964fa8a8fc8, 0xf6a1cdbcf41689, 0x943cb18fe7fda7, 0x606dafbf34440a,
            0x5d37a86399c789, 0xe79a2a69417403, 0xfe34f7e68b8866, 0x11f448ed2df10e,
        ]),
        td: FieldElement56([
            0x0e0a81033e033b, 0xaec986ee821eab, 0xd1a4a48379273c, 0x609b79a9e06304,
            0xe9618b4fe8f307, 0x6ffdfa50b50969, 0x9530224887ac0c, 0x20e7b36f0cef97,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xb37396c3320791, 0xfc7b67175c5783, 0xc36d2cd73ecc38, 0x80ebcc0b328fc5,
            0x43a5b22b35d35d, 0x466c9f1713c9da, 0x26ad346dcaa8da, 0x7c684e701183a6,
        ]),
        y_plus_x: FieldElement56([
            0xfd579ffb691713, 0xb76af4f81c412d, 0xf239de96110f82, 0xe965fb437f0306,
            0xca7e9436900921, 0xe487f1325fa24a, 0x633907de476380, 0x721c62ac5b8ea0,
        ]),
        td: FieldElement56([
            0x3f2ab1abd14b06, 0xb129a8e8e37230, 0x48bc5b083d5c64, 0x02606c12933a98,
            0xcf8051ceec1a73, 0xa755a8836c3ce6, 0x2dabaa90ca4cb9, 0xb6e5525ddfc0f2,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xdff3103786ff34, 0x0144553b1f20c3, 0x95613baeb930e4, 0x098058275ea5d4,
            0x7cd1402b046756, 0x74d74e4d58aee3, 0x5f93fc343ff69b, 0x873df17296b3b0,
        ]),
        y_plus_x: FieldElement56([
            0xc4a1fb48635413, 0xb5dd54423ad59f, 0x9ff5d53fd24a88, 0x3c98d267fc06a7,
            0x2db7cb20013641, 0xbd1d6716e191f2, 0x6dbc8b29094241, 0x44bbf233dafa2c,
        ]),
        td: FieldElement56([
            0xaa7c72be0ace19, 0x4095d22fc37e4d, 0xa7d85f9e3b7c61, 0xff21d344c9553c,
            0xd105d6268e8b86, 0x0616d733758845, 0x3ecb4ba7210610, 0x6a75e7dddc03b7,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x0a9ee23c06881f, 0x2c727d3d871945, 0xf47d971512d24a, 0x671e816f9ef31a,
            0x883af2cfaad673, 0x601f98583d6c9a, 0xb435f5adc79655, 0xad87b71c04bff2,
        ]),
        y_plus_x: FieldElement56([
            0x7860d99db787cf, 0xfda8983018f4a8, 0x8c8866bac4743c, 0xef471f84c82a3f,
            0xabea5976d3b8e7, 0x714882896cd015, 0xb49fae584ddac5, 0x8e33a1a0b69c81,
        ]),
        td: FieldElement56([
            0x84911d36175613, 0xdbaa24427629dd, 0x9b6f30b1554fc7, 0x26da093cf7ea9e,
            0xeac4cfb8218c7c, 0xc4bde074231490, 0x89e5b5afb62587, 0x67fcb73adfdbcc,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x7f8a43da97dd5c, 0x058539c800fc7b, 0x40f3cf5a28414a, 0xd68dd0d95283d6,
            0x4adce9da90146e, 0xbefa41c7d4f908, 0x7603bc2e3c3060, 0xbdf360ab3545db,
        ]),
        y_plus_x: FieldElement56([
            0xeebfd4e2312cc3, 0x474b2564e4fc8c, 0x3303ef14b1da9b, 0x3c93e0e66beb1d,
            0x13619b0566925a, 0x8817c24d901bf3, 0xb62bd8898d218b, 0x75a7716f1e88a2,
        ]),
        td: FieldElement56([
            0xf6de725e1976f0, 0xd96f80a02fda8a, 0xb25412a0e629fa, 0xc540e7e78fdb62,
            0x4ad02fb7336d3a, 0x4922ae1bea5a3a, 0x26147d42d4bfeb, 0xd379a5bc4b94bc,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x70047189452f4c, 0xf7ad12e1ce78d5, 0xaf1ba51ec44a8b, 0x5f39f63e667cd6,
            0x058eac4648425e, 0xd7fdab42bea03b, 0x28576a5688de15, 0xaf973209e77c10,
        ]),
        y_plus_x: FieldElement56([
            0xc338b915d8fef0, 0xa893292045c39a, 0x28ab4f2eba6887, 0x60743cb519fd61,
            0x06213964093ac0, 0x7c0b7a43f6266d, 0x8e3557c4fa5bda, 0x2da976de7b8d9d,
        ]),
        td: FieldElement56([
            0xb78d6075749232, 0x01dc47a33b2cdc, 0x18c7b2e91b24f1, 0xb5bdc68f9876bd,
            0x13f489ccba2b44, 0x3b8846066128de, 0x3d6252c8884dcf, 0xe3ae84b9908209,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x6366c380f7b574, 0x1c7d1f09ff0438, 0x3e20a7301f5b22, 0xd3efb1916d28f6,
            0x49f4f81060ce83, 0xc69d91ea43ced1, 0x2b6f3e5cd269ed, 0x5b0fb22ce9ec65,
        ]),
        y_plus_x: FieldElement56([
            0xaa2261022d883f, 0xebcca4548010ac, 0x2528512e28a437, 0x70ca7676b66082,
            0x84bda170f7c6d3, 0x581b4747c9b8bb, 0x5c96a01061c7e2, 0xfb7c4a362b5273,
        ]),
        td: FieldElement56([
            0x3cffdf14aed2fd, 0x9f0d77d7c5b2d9, 0x4812ec41321d9f, 0x8a1448bddf0916,
            0x8fef86030175df, 0xe3d703200a76c7, 0xd1babb470b2094, 0x9f3a43b0e5828c,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xae307cf069f701, 0x5859f222dd618b, 0x212d6c46ec0b0d, 0xa0fe4642afb62d,
            0x420d8e4a0a8903, 0xa80ff639bdf7b0, 0x19bee1490b5d8e, 0x7439e4b9c27a86,
        ]),
        y_plus_x: FieldElement56([
            0xa94700032a093f, 0x76e96c225216e7, 0xa63a4316e45f91, 0x7d8bbb4645d3b2,
            0x340a6ff22793eb, 0x6f935d4572aeb7, 0xb1fb69f00afa28, 0x9e8f3423161ed3,
        ]),
        td: FieldElement56([
            0x610b6394a312e8, 0x5aaa19d96160f5, 0x8190e286138c4a, 0x6538796a5cd53b,
            0xfe28804432a97c, 0x7315e011f55112, 0x0bd4157d5acb9d, 0xd1b95469350336,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x51cfcc5885377a, 0xdce566cb1803ca, 0x430c7643f2c7d4, 0xdce1a1337bdcc0,
            0x10d5bd7283c128, 0x3b1b547f9b46fe, 0x0f245e37e770ab, 0x7b72511f022b37,
        ]),
        y_plus_x: FieldElement56([
            0x60db815bc4786c, 0x6fab25beedc434, 0xc610d06084797c, 0x0c48f08537bec0,
            0x31aba51c5b93da, 0x7968fa6e01f347, 0x30070da52840c6, 0xc043c225a4837f,
        ]),
        td: FieldElement56([
            0xe4302ff9b6116c, 0x92314b81d5f02a, 0x0d31425f30702f, 0x4946262e04213c,
            0x7ead9d19b6f9ed, 0x1080a31ce8989f, 0x1b632f36672a74, 0xa03933d9645a83,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x8940211aa0d633, 0xaddae28136571d, 0xd68fdbba20d673, 0x3bc6129bc9e21a,
            0x0346cf184ebe9a, 0x68774d741ebc7f, 0x19d5e9e6966557, 0x03cbd7f981b651,
        ]),
        y_plus_x: FieldElement56([
            0x4a2902926f8d3f, 0xad79b42637ab75, 0x88f60b90f2d4e8, 0x30f54ef0e398c4,
            0x021dc9bf99681e, 0x7ebf66fde74ee3, 0x4ade654386e9a4, 0xe7485066be4c27,
        ]),
        td: FieldElement56([
            0xbba0ed9c67c41f, 0xb30c8e225ba195, 0x8bb5762a5cef18, 0xe0df31b06fb7cc,
            0x18b912141991d5, 0xf6ed54e093eac2, 0x09e288264dbbb3, 0xfeb663299b89ef,
        ]),
    },
];

/// Odd multiples `[B, 3B, 5B, ..., 63B]` for the vartime wNAF ladder.
pub(crate) const AFFINE_ODD_MULTIPLES_OF_BASEPOINT: [NielsPoint; 32] = [
    NielsPoint {
        y_minus_x: FieldElement56([
            0xcfc32590115acd, 0x79f0e2a5c7af1b, 0xdd94605b8d7332, 0x17dd6c75f5f3f3,
            0xd9c59e36156de8, 0xedfbfd6cde47d7, 0x95b97c9f67c39a, 0xfd7b90f587debc,
        ]),
        y_plus_x: FieldElement56([
            0xcfc32590115acd, 0x79f0e2a5c7af1b, 0xdd94605b8d7332, 0x97dd6c75f5f3f3,
            0xd9c59e36156de9, 0xedfbfd6cde47d7, 0x95b97c9f67c39a, 0x7d7b90f587debc,
        ]),
        td: FieldElement56([
            0x1071dd4d8ae672, 0x4f14ebe5f4f174, 0xe0987625c34c73, 0x92d00712c6f8c1,
            0x9ef424965e980b, 0xa8e0cf9369764b, 0x0aa81907b4d207, 0xd5002c74d37924,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x315f0372d1774a, 0x7de9ed2960e79d, 0x8b3d7c4c198add, 0xa5e6a45fa57892,
            0xf32201aa80115a, 0x7fb9386a433a1a, 0xabf6960b291ee6, 0x2d8069294ebc2a,
        ]),
        y_plus_x: FieldElement56([
            0xf3c4efe62b8b17, 0x1e6acc1b6add7b, 0x3367ef45836df5, 0x0efc2d87a6ba53,
            0x405a96933964ca, 0x572c2ae16357c6, 0xa9dc34ba6a7946, 0x151831e32ad161,
        ]),
        td: FieldElement56([
            0xfa5e878ae22827, 0xd33c7bb3963bd0, 0x53401a101efac6, 0x63df0bcbce59a5,
            0x7bca269c8b584b, 0x611a8a9978842c, 0xbb96e8da12b8a8, 0xe17844d01d394d,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xf3123b214085fb, 0xd005bafffb8f53, 0xd1606987dfe6ea, 0xe825edf73b018d,
            0x82aa733829a933, 0xc857d8d7830d76, 0xebdb8d2cbbe7e6, 0x63de0e9930722e,
        ]),
        y_plus_x: FieldElement56([
            0xc107c50e9b4d0d, 0xf6b65a5fada2f2, 0x0bb67e79353fae, 0x18853f610ed92d,
            0x8c51f4d36d6915, 0xe3e9c096dd1c12, 0x9d6b9ea6cde415, 0x304864dd66f4c6,
        ]),
        td: FieldElement56([
            0x4ffebce35619ab, 0xd281a1543365c5, 0xad17eeb3d098b8, 0x8653b06bb7806d,
            0x40026e64a28b62, 0xd9e06d52ea19df, 0x8e7c684856876a, 0x3ebbc191443f3b,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x15326f3e1f5fb6, 0x76886ca4eb6041, 0xfb34645ee36c23, 0x6042a4cb8f7bb2,
            0xb43e736403dd2f, 0xa8986566e7c60c, 0x10ea48904bf6d1, 0x8b5ae8c5ddafbe,
        ]),
        y_plus_x: FieldElement56([
            0xc0a062813b8884, 0x54d18cc36e636b, 0xe4493fcadba51a, 0x5cda5b6577c9cf,
            0xcc165615c315cf, 0x1bbd5e155f17bb, 0x4dee92a4f18e47, 0x3e95412929bfb8,
        ]),
        td: FieldElement56([
            0x3a9f4a12faee9a, 0xe6ba523a29af6b, 0x1dde79a8ef06ef, 0x33ed4361647314,
            0xb0556ae76eb1c9, 0xe8b892762bd092, 0x4709c83705e374, 0x77382d86f79b47,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x1081503e396419, 0x7a2c7aa8870415, 0xd372a4baf3490a, 0xb18821a1e18013,
            0xb83fa876c54211, 0xe4bcf47a2ae1e9, 0x69a384ba9bf3c3, 0xb784d44ee9d468,
        ]),
        y_plus_x: FieldElement56([
            0x6638c5cee4113d, 0x5c100c7276ed52, 0xd10562e281768d, 0x08e851e1eb2ed9,
            0xd7cc086a7af373, 0x993ed528eb7942, 0x51677625b7df14, 0x29fbbcf6aaa3f7,
        ]),
        td: FieldElement56([
            0xb4e3ad7c2ea1be, 0x9962715cf7008a, 0xfbc6fdcc089d5e, 0x1e29847c349313,
            0xc1145569b3874d, 0x94f50069a1499b, 0x4cec2bb8f423c8, 0x77eb0034c34627,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x68db473197248f, 0x89874a12ff90c2, 0x420b4763f5428c, 0xd668b71fb38392,
            0x22279b6d3c3687, 0x3a5801405cf566, 0x127b8ea4b4fd44, 0xce6a975208fb79,
        ]),
        y_plus_x: FieldElement56([
            0x8f00d279b21a44, 0xa5c81149c8116a, 0xcc8be3da721e9f, 0x1935a34e6770b9,
            0xe315426d5db99d, 0xcf6a842aff01bf, 0xe3cc9d5016ed3a, 0xae78776098742d,
        ]),
        td: FieldElement56([
            0x797ca039d44238, 0x63cae935b6ef5e, 0x6a938e072ff87c, 0x6a3870309cdca0,
            0x03800945fa3ddc, 0x32274c0728b5ad, 0x53a51e9217da91, 0x162b41712b79db,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x3f31eebfa20d27, 0xb1c0c84d6c2849, 0xdbefe8d1e53924, 0x472400b407ebc2,
            0xc584bf62a91498, 0xc1f095f2010650, 0x7e3b1b2c9ba41e, 0x3189f894ed89dc,
        ]),
        y_plus_x: FieldElement56([
            0x0911f06768bdc6, 0xbd27650f82c5b0, 0x7b948017bcb94a, 0x95de039572c65e,
            0x53743dabe00d25, 0x92b1d5888cd8cd, 0x65c6496b33c0d0, 0x7a3f55d5bfb370,
        ]),
        td: FieldElement56([
            0x4d9eefe5de7ab7, 0x3e35169bdbd884, 0x79625f58822d97, 0x43f4f607137c15,
            0x29efd80717d455, 0x55b37a66623198, 0x153cecd460c01e, 0x0464f30e396a2d,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xbcf86d6aaed0f2, 0xb95ff679e8a71f, 0xc11d7bd57f8c87, 0xcb3362ed671b05,
            0x68bb14b2ce4c10, 0x505313699af32f, 0x5376e4cec89e51, 0x179b292d918f75,
        ]),
        y_plus_x: FieldElement56([
            0x57b28375dc4b6e, 0x771e6557974d80, 0xfa6792bc187316, 0x0d7fed0f9f92d7,
            0xe821281efdb64b, 0xa12bf7b4dc5064, 0x464f56bfa9bb8d, 0x526fa933114e0b,
        ]),
        td: FieldElement56([
            0x246e4ca8018aa1, 0x5e55abb4eaca63, 0x50b6ce5fe6aa8b, 0x8979edb01ee510,
            0x2e152c38461080, 0x550a03a7f073ea, 0x18d841eb811e13, 0xc39e3e1ea88479,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x62c03567cddf30, 0x32ee53437ac23b, 0xe8a6fbf62d80e2, 0x2de89967f7d7fd,
            0x05fedae4d7c736, 0x22d685f264ae39, 0x28936d3fba7df5, 0xacb4383b936fcc,
        ]),
        y_plus_x: FieldElement56([
            0x7f1264364f8cc7, 0x0315388ba2d9ad, 0x7562aa0a0d3396, 0x69318d20cfe53a,
            0x0acdcd1868b277, 0x8e8d738518c6b8, 0x6faf89fda8f887, 0x347e30277c4e4d,
        ]),
        td: FieldElement56([
            0xafee55215c8c25, 0xc57a8713769fcb, 0x0df59aca05928e, 0xaead2ce1a57830,
            0xd453e3719735cd, 0x4f1cdc24b3ec7e, 0x0e2a69482a51da, 0x151ba7f6834b1f,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x6df537f064f2de, 0x07f0808cbfedb9, 0x792c87b64aa829, 0xfd42b4ce848ad1,
            0x4d9b9c66c5bd43, 0xdf8fbdd58c4ed6, 0xcbe5355fc7f34c, 0xabe6eb22995e4d,
        ]),
        y_plus_x: FieldElement56([
            0x3eaec329954173, 0xfec61feee76bb2, 0x9b544347f7f444, 0x4c4f7dfdb8cebd,
            0x39d610da25dbfb, 0x0f513ccef26480, 0xaf4ddd8b8d2732, 0x093756dd2be04b,
        ]),
        td: FieldElement56([
            0xef8a330d9484e0, 0x44944dece8fbcc, 0x16b6e52d9d2586, 0x610b0b72d2c7b3,
            0x766d88f8990f61, 0xea7bc69494eefe, 0x50c07989360110, 0xdb9fc3bfd96ee7,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x62284cece6ad83, 0xe18536b7278c56, 0x05ab4b910698c5, 0x9910472a4fd019,
            0x8ab4e2c6d75150, 0xfbd9d538d59094, 0x86482b65914fd9, 0xced958acabfefd,
        ]),
        y_plus_x: FieldElement56([
            0x69991db096c6b8, 0x08ebceed962ba0, 0xef0053e2f37ae3, 0x9917f3c8c9cb68,
            0x0e0b52fef39f4e, 0xea378bf7b8f008, 0x9ae2a16388995b, 0x7ec77e628ee921,
        ]),
        td: FieldElement56([
            0xc6cb4ee3a8dac4, 0x10cf7120de0b91, 0x1ab166385e9e67, 0x7f2a8eca89b19c,
            0x8ae3d846b943da, 0x22c7631b161ed6, 0x5e5d402e327b23, 0xd0518c1aeb64cd,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x6ee9a82004b322, 0x3eff4833aac2f9, 0xbb62f8a13b9833, 0x8f9deff439b18f,
            0xbc30790842de17, 0x0bfe23b4868215, 0xaddb504d09d19a, 0x2e121c04a5bd41,
        ]),
        y_plus_x: FieldElement56([
            0x0d45c95be55ebb, 0x5f3dd26b911e70, 0x755171065eb066, 0x110b2864e644c9,
            0x718a31c2d84e02, 0x59a255fc4d65d8, 0x26337c97b14eba, 0x61e127f33d128b,
        ]),
        td: FieldElement56([
            0x4126ac2e668677, 0x46c12e8a5dbed7, 0x78e3a69c049c9a, 0x35d20dffeb5878,
            0x0a263e2f4cbcdc, 0x090a6bd7e724f5, 0xb33f6e0b6366f9, 0x175e7759f40060,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xcd3889dfcd0517, 0x1bf78dcd1f43de, 0x0898cbb491727a, 0x440c964893d55d,
            0x75e0b9391ea8f2, 0xec9732687fc960, 0x8ca65c62f86bcf, 0xfc9b9aed6debcb,
        ]),
        y_plus_x: FieldElement56([
            0x83b4b835838c18, 0xac69ddefc68cb4, 0x749b220f1ba281, 0x4052a50d7a193d,
            0x7138ee3a4e5e56, 0x3099ccfedc8067, 0x6e811c0e9aaed9, 0xbead0cc8101227,
        ]),
        td: FieldElement56([
            0xf8381236cfa255, 0xf5999b0d8c8fe3, 0x0918786a1dff4e, 0xa2fa46132db8c1,
            0xeb0a0e8379a878, 0x3802d2e990566a, 0xb6c65d27147f1f, 0xddbb45f6bd3e66,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xcde18980fd9d30, 0xd1a82889350971, 0x40d36b7eb0fbc8, 0x3cc6e695329dd0,
            0xe24b3318e1d88e, 0xe212a22459111d, 0x879f754eaab372, 0xf9801f5489c9a4,
        ]),
        y_plus_x: FieldElement56([
            0x0f68a71ee1c67a, 0xe96102429b052c, 0x17776482925329, 0xca322a71577df6,
            0x4325b8a79280b5, 0xc322234d786f77, 0xe9258fe7816ab4, 0x6aa915d16d5532,
        ]),
        td: FieldElement56([
            0x7354e942e00768, 0x4c7668d3208ac0, 0x15712e1b92023f, 0xb018106b3a760b,
            0xd4751647fa130b, 0xda3f7276d78b5a, 0xdc6c71672bb3b3, 0x08a6ecb3540963,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x93d57b9871b4c4, 0x85e6b5532e7970, 0x12fdda50bdb89e, 0x25f590d6c39b47,
            0xef9d53a39585e6, 0xcf0a88a575110b, 0xfd53552894850f, 0xbef47029c5a860,
        ]),
        y_plus_x: FieldElement56([
            0xe13a624c26a6f1, 0xe161c0e3c0e7d2, 0xba563c13d354eb, 0xf7e67a8d51498c,
            0x88c48bf9742e97, 0xedaca155c6abcb, 0xbb24561c4448b5, 0xd045b2c38b42f1,
        ]),
        td: FieldElement56([
            0xbd40f701996dd3, 0xcce747044b6173, 0x28a6b9ffb55eb3, 0x09fea794bd40e3,
            0x38b30e26ed0198, 0x5434c968b4cf52, 0x814878df362d47, 0x60ab54842b207a,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x246036b708c7d9, 0x0574c8b9127116, 0xecd349a550414d, 0x3c900c0186da47,
            0x7c82512cac2d00, 0x1399e41f99830b, 0xa414712d16fdfb, 0x28822961a9b698,
        ]),
        y_plus_x: FieldElement56([
            0xbd19d97479e8ae, 0xf722fb96aff3e9, 0x4ae4a83cc75c02, 0x33bb6827a30094,
            0xd0ec294a83cb5a, 0x7c9ad150cfeefa, 0x33cbbd6b336c57, 0x9f0b2fd7ef1d8f,
        ]),
        td: FieldElement56([
            0x576abc9c32ae74, 0x52e8eedb433484, 0x9a0b95b52551ff, 0xe4e5a4d5691aff,
            0xbc01db07dccd79, 0x996692751e0d3c, 0x3acf0cd9be9606, 0x3f06d2f83095a8,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xc95aa397ea26bc, 0x7372e21066c24c, 0xd1f1e17008ce70, 0x277c5b46d24ff5,
            0xd0a187e51cc6f8, 0xe58d524dca3f92, 0x0d1a618c916355, 0xe5b4a71cfce6eb,
        ]),
        y_plus_x: FieldElement56([
            0x28c4051a1ff7bb, 0x40ba689904a0ad, 0x9e4b0a5acec321, 0xbc6d2b3c46aaeb,
            0xf2caae4ef88adb, 0xff6677bf11a28e, 0x92191cbfbb7484, 0xdae55afb78a291,
        ]),
        td: FieldElement56([
            0xc40cbcbd853cbd, 0x523f5879bd473a, 0xfc476ce8a57ceb, 0x9e5cb521a8fc43,
            0x15c157448e29cc, 0x41f2065e0e673d, 0xb9227183e9ca04, 0x0eadc022da2a1a,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x9cc09c03622bf9, 0x18ec007f1fb5bc, 0x9f39168f0d29de, 0x5a83280f20e76e,
            0x0dbf95aaf9af43, 0x4f9bd6f102397b, 0xe154febb2e86e9, 0x32ea079c3d6c54,
        ]),
        y_plus_x: FieldElement56([
            0xd6313aad8c08f2, 0x8fbb11d8a39cbf, 0xbf09c856cfea1d, 0xcc7448724a5516,
            0xeb6e4d59ecdeb7, 0x5eda293019421c, 0xa0853a9e457996, 0xe2a1515c045530,
        ]),
        td: FieldElement56([
            0xfab169ca1c41ce, 0xf1bc0ce1d78d41, 0x2fa4e361cc67be, 0x9053af427e0267,
            0x32387ad15144f5, 0xb00ae64f9e66e4, 0x6f6617ef82b37a, 0xd8c1db3c95b59e,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xf8f4bbbe10d3b9, 0x105a4fd7fe5ef6, 0x40f473c119b520, 0x75981f4cbad167,
            0xe6e94e0d05858a, 0x287e587009323c, 0x797d31a81a36e6, 0x33eef622def25c,
        ]),
        y_plus_x: FieldElement56([
            0x35175500c7799c, 0xa167c5ca225e38, 0x854efcf271c80b, 0x1b76bf0a2fcd01,
            0x95c90610cf4ccd, 0x64190fc6a738a8, 0x79dce31456ebff, 0x742f0847dc1855,
        ]),
        td: FieldElement56([
            0x3077e1410a5ba5, 0xb14158718390d3, 0x6f256df630d95f, 0x21d4d1b388a47b,
            0x8e29fce3c3ea50, 0x2616d810e8828f, 0x76b1173dc76902, 0x1c4c4bfe1be552,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xdfb010d979be8f, 0x7e6d963a211f07, 0x404b8ec1368699, 0xd9cc6590cb2087,
            0xe0d919b389e23c, 0x1001c50cec349f, 0x1e848fec709fe4, 0x0e91e3326121a1,
        ]),
        y_plus_x: FieldElement56([
            0xa2657cac024d24, 0xaa33dfb739670f, 0x093b53769a8de7, 0xadafcb28c0514d,
            0xbca8890425c381, 0x8f15acedcdc343, 0x85efa2bb2f9604, 0x92437292387955,
        ]),
        td: FieldElement56([
            0xe8300e632c6b13, 0x010847ef6dda78, 0x19b7c68f200ab7, 0x220c952978bd9b,
            0x19e887adc0331c, 0x6c5993f36c4db5, 0x02c98eeb248079, 0x89ad282231d922,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x26d312845ed7bc, 0x51563888e17918, 0xb99c696ccab084, 0x59d7244957f3b8,
            0xc5f4faf8c8d6ab, 0xbdeeec54ba3f26, 0x1aba0f7c9d5485, 0xd731f784b29269,
        ]),
        y_plus_x: FieldElement56([
            0x59811830606614, 0xa8ec4d8a0d0097, 0x0e2ac957beaec2, 0x7dc4a64fdb8ed1,
            0x63b9462f2c7312, 0x324ea6a55d282b, 0x7c8a4cbdc26507, 0xf54f4ae9268708,
        ]),
        td: FieldElement56([
            0xbd7234c3aef4f0, 0xa7a9f815db44b1, 0xc8c940e9fc9785, 0x3b81a973b01c38,
            0xc32ffd7d7b79f9, 0xbc5b783c46e6c6, 0xb003fb1ef6a5f9, 0x5b36765c2b46e7,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x578872f1bd6085, 0xb3fd4fa6efa597, 0xe99ac49f625c00, 0x2aef842e5ed2d8,
            0x4b8f706588e353, 0x449c499dfcc096, 0x8d0cdddbf18dea, 0xe6bba4a6396ddd,
        ]),
        y_plus_x: FieldElement56([
            0x30b09f9659a719, 0xac35ad7a6bc959, 0x9b466b281c1ee8, 0x34b96465f80acb,
            0x304970c66162b7, 0x0f2347253e3918, 0x0d54980ac74c5a, 0xaaabb0e875468a,
        ]),
        td: FieldElement56([
            0x66485d97a2ac73, 0x1d0e768483ffe7, 0xc5253731b7251c, 0xf76d892a3af3f3,
            0xe8d035f85298e7, 0x34e58d0abf961a, 0xb11bd0eccaba4c, 0x87a079aec9d0e9,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xb63453c7af61ee, 0xeadcbafa2bd320, 0x86b04f4a7bf0e3, 0xb69bc8cbbfba5a,
            0xce4926bb1b064e, 0x4df8ce753e0a27, 0xff37bf2580a3a2, 0xad90c8c5a377eb,
        ]),
        y_plus_x: FieldElement56([
            0xd38488bd2e2026, 0xd35414e79dc3fe, 0xfaa0a1c1fbbbb9, 0x93df0c4b10ab45,
            0x39ffebe1394c9f, 0xcab0bc80e5cd5c, 0x453b9db5cadf06, 0x3b7c08cb56f96e,
        ]),
        td: FieldElement56([
            0xac58c82bdd6e72, 0x08035e278a79da, 0x3c9fcc92524fb3, 0x0c71c26ea75e47,
            0x9631c4be717b38, 0xa2e968135e9152, 0x074295ca131ec2, 0x877a203d4a5015,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x3c9e851d9f8893, 0x4df23c1696dd28, 0x5e587fddb98f95, 0x359afa5adbfdbb,
            0xddb949d26e687c, 0xebc6efd285564c, 0x1750eec619bdd3, 0x37772e4ad0d4fa,
        ]),
        y_plus_x: FieldElement56([
            0xa49896f002be26, 0xad6b0d720ae906, 0x5786d8dbed0346, 0xf6749d6592e372,
            0x0542c37faf79a4, 0x3281a4f5c7863a, 0xeacdc7def0cbdc, 0xca8353efe160bd,
        ]),
        td: FieldElement56([
            0x76e84babbbb048, 0x0a6db83681bbe4, 0x59dff597eaead2, 0xf65bdd79fe2dab,
            0xe3fc9faa642c8a, 0x8a9cc9dfc634c9, 0x428a4b728b1cd4, 0xe80aea53cb6617,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xeacd58001be3a5, 0x14e1231ca72940, 0x22453384987584, 0x75848f0c37be5c,
            0x0e6dc40d82c0b2, 0xf4d8ec1270878c, 0x550981d6fb86fd, 0xbb66b58f4c6892,
        ]),
        y_plus_x: FieldElement56([
            0x2ab17fdf7d2bd3, 0x5aa55f23183393, 0x9b88469f8c0eb9, 0x7d101b314bca6b,
            0x56dd4345fd97b9, 0x880e62e548ae7d, 0x3d44d8c87b91a6, 0xfb2811386e22cc,
        ]),
        td: FieldElement56([
            0xbba772e57e297f, 0x4f56f68df71b07, 0xded9facaf23a81, 0xd78e832d78eedc,
            0x04f7c3eff02685, 0xba5fa931f9c020, 0x5a29fb4b2295be, 0xe2543f745b1dc9,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x3b778e67285805, 0xdbb06704ba87b5, 0xba6ee1ea5ea2fe, 0xe2cdc2c8b3f699,
            0x6983c6eae69a9c, 0xc6c8c542d0c398, 0xf2d3a9ebcedbdc, 0xbe30ddeabbd31c,
        ]),
        y_plus_x: FieldElement56([
            0x712177652580f9, 0xe9ee16e21d1eca, 0x02465ba75b8e46, 0xa9cb7b1fc8ef2e,
            0xce337e6da1cf8e, 0x9d3684c507fffa, 0x058cc115d71214, 0x17dba81e144377,
        ]),
        td: FieldElement56([
            0x95f20a016490a6, 0x5f2b00b9fbf26d, 0xb583124906cdaf, 0x2e2077aa473ca8,
            0x18c5b9f7902fa6, 0xb704f5229201a6, 0xe1fc5d70e4b1c2, 0x578e366ccf7289,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xcf244d2e899137, 0xa793f52ec7aaa1, 0x2e5cb0616e3883, 0x9cbf752f176feb,
            0x29edce4fa090a3, 0xf6540a960a0275, 0x513985eef0e3bc, 0xce2e586f6c7228,
        ]),
        y_plus_x: FieldElement56([
            0x932127be1d579d, 0xe6729f50f54904, 0xe70f6247f618af, 0xb1953989fe9d9c,
            0x15032e9df69633, 0xd3687b35cb6e82, 0xab0fff86869218, 0x26054a3a68ddfb,
        ]),
        td: FieldElement56([
            0xb42f011dbc757c, 0x4a8e19d4f07c42, 0xa6d7828318b7ff, 0x04c9ce49ba3c0f,
            0x5fe71688087b6a, 0x6e1d8f9a3d84ed, 0x89693e7e8e9a1f, 0x73bf4183ba45c5,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x5f0cd9cd83497b, 0xe382f098d97f00, 0x73e37e004eed2e, 0x0707fe98b12237,
            0x16d92a2b73d561, 0xa42926ab390165, 0xb394db4b1cc8fc, 0x2fa14a3f6efa33,
        ]),
        y_plus_x: FieldElement56([
            0x29e8ce35530d30, 0xd20f389f61fe3a, 0xcf9e8ddf74e1d4, 0x4bec01b04d4979,
            0x7d92c9f6fd5ddd, 0xc072fa91981808, 0x9afda4fe8a1676, 0xc96522ee879a14,
        ]),
        td: FieldElement56([
            0x55076a513d05ee, 0xf076d43cec14ad, 0xa4e386b252faf4, 0xc0713b79b313eb,
            0x507efa72f46f19, 0x141bc1e7c66844, 0x5629ef060c19ea, 0x85327113d1772c,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0xb64d054ec7ed5c, 0x7b924cd329fbce, 0xfe8805a8737293, 0xfb82f1d52b43ae,
            0x4ea745c72e1a76, 0x95ba2552861c0c, 0xf66846c3547784, 0x3b815bd05dc23c,
        ]),
        y_plus_x: FieldElement56([
            0xed490108514e35, 0x6bed897e6b4958, 0x00f2cae0dc546c, 0x8175eb3e5008e4,
            0x93e3fe8f3aed42, 0xe9dbc15fd54d1a, 0x844979a4cfc0c1, 0xea3194d64ea60b,
        ]),
        td: FieldElement56([
            0x669e32fd197ef7, 0x1dfca2c5e2f7c9, 0xa2ae0964a1e5e2, 0xb4334b15c91232,
            0x96419585110d96, 0x9c0b2262172a58, 0x9d7c87cf6d35ca, 0x8a5ce50d3cabf6,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x3bedc9ae9d1730, 0xfedd7c04cbc775, 0xc19abc4540c61d, 0x115294c57fb687,
            0x663fceb174cd8f, 0x1671f572b885b0, 0x2d14694ed85978, 0x127282078a8e44,
        ]),
        y_plus_x: FieldElement56([
            0x888b9c1cf73530, 0x375346c6afecd2, 0x142240b35b74d3, 0xd952835f86a5f5,
            0x0665c2658eaf9a, 0xf29f43062b2033, 0xa19a58c5bc85f9, 0xe62ac95724a937,
        ]),
        td: FieldElement56([
            0xe6d2822aa72eca, 0xd832957cdc0058, 0xdc60e5bed23e18, 0xb94b4c418b03a3,
            0xdf3b85d410a430, 0x55e81b70bc79d4, 0x081d9369cbd1a0, 0xf7fee3acf0c656,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x552b53a9640f0e, 0x5985236f4d88bf, 0xb7aaec965a8ae5, 0xcedada7b5ccf95,
            0x7b1ea2088f1902, 0x28445e38b4a7fa, 0x57f10ddc50efed, 0x7637a3147bc5cb,
        ]),
        y_plus_x: FieldElement56([
            0x3baba41b5abffb, 0x661ee09fca8193, 0xe0c6c92e6aea59, 0x886c207bcbe591,
            0xaef9e7798e8004, 0x164f599f4d707a, 0xbb1597a76d21f2, 0xfda82d5e025626,
        ]),
        td: FieldElement56([
            0x8174fe4db53757, 0x930c4f4a35ecc8, 0x0e9f82c1c95a8f, 0xc6480547d66e5e,
            0xdce888f9a7bf39, 0x6671a5022cb906, 0x4823c19b5337a0, 0x455338b7fec529,
        ]),
    },
    NielsPoint {
        y_minus_x: FieldElement56([
            0x71595be88a7f40, 0xa05e6ac1c0fc87, 0xa01bf6538b29eb, 0xbadcd80b881fb8,
            0x5bfe7af8049f8b, 0x84918e6ae35537, 0xed4bd54759316e, 0x7f135988d6b548,
        ]),
        y_plus_x: FieldElement56([
            0x5ac123fdc45964, 0x395057c2221d17, 0x3c09c74cf84eb1, 0xb5ca859bbebf9d,
            0x1b26b274a7d235, 0xe8c63508e96a48, 0xedbce4d51d721e, 0xc49436797d6f83,
        ]),
        td: FieldElement56([
            0x75656c41e06629, 0x86059d83396637, 0x4f304ecb457b37, 0xe3b4887db6be65,
            0x20b54c263bb0be, 0x60a69193e561c3, 0xe6863f20dc8ce9, 0xafe16ac56e6478,
        ]),
    },
];
