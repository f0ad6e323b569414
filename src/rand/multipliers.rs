/// Odd 64-bit multipliers the fallback mixer picks between on each step.
pub const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0xd6e8_feb8_6659_fd93,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
];
