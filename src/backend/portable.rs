//! Pure emulation backend.
//!
//! Instantiates every capability with no overrides, so each type runs the
//! trait defaults. The 128 and 256-bit sets are only instantiated here when
//! no ISA module claims them.

use crate::types::*;

uint_vector!(U8x1);
uint_vector!(U8x2);
uint_vector!(U8x4);
uint_vector!(U8x8);
uint_vector!(U8x64);
uint_vector!(U8x128);
uint_vector!(U16x1);
uint_vector!(U16x2);
uint_vector!(U16x4);
uint_vector!(U16x32);
uint_vector!(U16x64);
uint_vector!(U32x1);
uint_vector!(U32x2);
uint_vector!(U32x16);
uint_vector!(U32x32);
uint_vector!(U64x1);
uint_vector!(U64x8);
uint_vector!(U64x16);
int_vector!(I8x1);
int_vector!(I8x2);
int_vector!(I8x4);
int_vector!(I8x8);
int_vector!(I8x64);
int_vector!(I8x128);
int_vector!(I16x1);
int_vector!(I16x2);
int_vector!(I16x4);
int_vector!(I16x32);
int_vector!(I16x64);
int_vector!(I32x1);
int_vector!(I32x2);
int_vector!(I32x16);
int_vector!(I32x32);
int_vector!(I64x1);
int_vector!(I64x8);
int_vector!(I64x16);
float_vector!(F32x1);
float_vector!(F32x2);
float_vector!(F32x16);
float_vector!(F32x32);
float_vector!(F64x1);
float_vector!(F64x8);
float_vector!(F64x16);

cfg_not_vec128! {
    mod width128 {
        use crate::types::*;

        uint_vector!(U8x16);
        uint_vector!(U16x8);
        uint_vector!(U32x4);
        uint_vector!(U64x2);
        int_vector!(I8x16);
        int_vector!(I16x8);
        int_vector!(I32x4);
        int_vector!(I64x2);
        float_vector!(F32x4);
        float_vector!(F64x2);
    }
}

cfg_not_vec256! {
    mod width256 {
        use crate::types::*;

        uint_vector!(U8x32);
        uint_vector!(U16x16);
        uint_vector!(U32x8);
        uint_vector!(U64x4);
        int_vector!(I8x32);
        int_vector!(I16x16);
        int_vector!(I32x8);
        int_vector!(I64x4);
        float_vector!(F32x8);
        float_vector!(F64x4);
    }
}
