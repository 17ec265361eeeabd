// Generated by scripts/gen-tables.pl from the Unicode Character Database
// version 14.0.0. Do not edit by hand.

use crate::class::{EastAsianWidth as W, LineBreakClass as L};

/// Version of the Unicode Character Database these tables were built from.
pub const UNICODE_VERSION: &str = "14.0.0";

/// Line_Break ranges; code points not covered are `XX`.
pub(crate) static LINE_BREAK: &[(u32, u32, L)] = &[
    (0x0000, 0x0008, L::CM),
    (0x0009, 0x0009, L::BA),
    (0x000A, 0x000A, L::LF),
    (0x000B, 0x000C, L::BK),
    (0x000D, 0x000D, L::CR),
    (0x000E, 0x001F, L::CM),
    (0x0020, 0x0020, L::SP),
    (0x0021, 0x0021, L::EX),
    (0x0022, 0x0022, L::QU),
    (0x0023, 0x0023, L::AL),
    (0x0024, 0x0024, L::PR),
    (0x0025, 0x0025, L::PO),
    (0x0026, 0x0026, L::AL),
    (0x0027, 0x0027, L::QU),
    (0x0028, 0x0028, L::OP),
    (0x0029, 0x0029, L::CP),
    (0x002A, 0x002A, L::AL),
    (0x002B, 0x002B, L::PR),
    (0x002C, 0x002C, L::IS),
    (0x002D, 0x002D, L::HY),
    (0x002E, 0x002E, L::IS),
    (0x002F, 0x002F, L::SY),
    (0x0030, 0x0039, L::NU),
    (0x003A, 0x003B, L::IS),
    (0x003C, 0x003E, L::AL),
    (0x003F, 0x003F, L::EX),
    (0x0040, 0x005A, L::AL),
    (0x005B, 0x005B, L::OP),
    (0x005C, 0x005C, L::PR),
    (0x005D, 0x005D, L::CP),
    (0x005E, 0x007A, L::AL),
    (0x007B, 0x007B, L::OP),
    (0x007C, 0x007C, L::BA),
    (0x007D, 0x007D, L::CL),
    (0x007E, 0x007E, L::AL),
    (0x007F, 0x0084, L::CM),
    (0x0085, 0x0085, L::NL),
    (0x0086, 0x009F, L::CM),
    (0x00A0, 0x00A0, L::GL),
    (0x00A1, 0x00A1, L::OP),
    (0x00A2, 0x00A2, L::PO),
    (0x00A3, 0x00A5, L::PR),
    (0x00A6, 0x00A6, L::AL),
    (0x00A7, 0x00A8, L::AI),
    (0x00A9, 0x00A9, L::AL),
    (0x00AA, 0x00AA, L::AI),
    (0x00AB, 0x00AB, L::QU),
    (0x00AC, 0x00AC, L::AL),
    (0x00AD, 0x00AD, L::BA),
    (0x00AE, 0x00AF, L::AL),
    (0x00B0, 0x00B0, L::PO),
    (0x00B1, 0x00B1, L::PR),
    (0x00B2, 0x00B3, L::AI),
    (0x00B4, 0x00B4, L::BB),
    (0x00B5, 0x00B5, L::AL),
    (0x00B6, 0x00BA, L::AI),
    (0x00BB, 0x00BB, L::QU),
    (0x00BC, 0x00BE, L::AI),
    (0x00BF, 0x00BF, L::OP),
    (0x00C0, 0x00D6, L::AL),
    (0x00D7, 0x00D7, L::AI),
    (0x00D8, 0x00F6, L::AL),
    (0x00F7, 0x00F7, L::AI),
    (0x00F8, 0x02C6, L::AL),
    (0x02C7, 0x02C7, L::AI),
    (0x02C8, 0x02C8, L::BB),
    (0x02C9, 0x02CB, L::AI),
    (0x02CC, 0x02CC, L::BB),
    (0x02CD, 0x02CD, L::AI),
    (0x02CE, 0x02CF, L::AL),
    (0x02D0, 0x02D0, L::AI),
    (0x02D1, 0x02D7, L::AL),
    (0x02D8, 0x02DB, L::AI),
    (0x02DC, 0x02DC, L::AL),
    (0x02DD, 0x02DD, L::AI),
    (0x02DE, 0x02DE, L::AL),
    (0x02DF, 0x02DF, L::BB),
    (0x02E0, 0x02FF, L::AL),
    (0x0300, 0x034E, L::CM),
    (0x034F, 0x034F, L::GL),
    (0x0350, 0x035B, L::CM),
    (0x035C, 0x0362, L::GL),
    (0x0363, 0x036F, L::CM),
    (0x0370, 0x0377, L::AL),
    (0x037A, 0x037D, L::AL),
    (0x037E, 0x037E, L::IS),
    (0x037F, 0x037F, L::AL),
    (0x0384, 0x038A, L::AL),
    (0x038C, 0x038C, L::AL),
    (0x038E, 0x03A1, L::AL),
    (0x03A3, 0x0482, L::AL),
    (0x0483, 0x0489, L::CM),
    (0x048A, 0x052F, L::AL),
    (0x0531, 0x0556, L::AL),
    (0x0559, 0x0588, L::AL),
    (0x0589, 0x0589, L::IS),
    (0x058A, 0x058A, L::BA),
    (0x058D, 0x058E, L::AL),
    (0x058F, 0x058F, L::PR),
    (0x0591, 0x05BD, L::CM),
    (0x05BE, 0x05BE, L::BA),
    (0x05BF, 0x05BF, L::CM),
    (0x05C0, 0x05C0, L::AL),
    (0x05C1, 0x05C2, L::CM),
    (0x05C3, 0x05C3, L::AL),
    (0x05C4, 0x05C5, L::CM),
    (0x05C6, 0x05C6, L::EX),
    (0x05C7, 0x05C7, L::CM),
    (0x05D0, 0x05EA, L::HL),
    (0x05EF, 0x05F2, L::HL),
    (0x05F3, 0x05F4, L::AL),
    (0x0600, 0x0608, L::AL),
    (0x0609, 0x060B, L::PO),
    (0x060C, 0x060D, L::IS),
    (0x060E, 0x060F, L::AL),
    (0x0610, 0x061A, L::CM),
    (0x061B, 0x061B, L::EX),
    (0x061C, 0x061C, L::CM),
    (0x061D, 0x061F, L::EX),
    (0x0620, 0x064A, L::AL),
    (0x064B, 0x065F, L::CM),
    (0x0660, 0x0669, L::NU),
    (0x066A, 0x066A, L::PO),
    (0x066B, 0x066C, L::NU),
    (0x066D, 0x066F, L::AL),
    (0x0670, 0x0670, L::CM),
    (0x0671, 0x06D3, L::AL),
    (0x06D4, 0x06D4, L::EX),
    (0x06D5, 0x06D5, L::AL),
    (0x06D6, 0x06DC, L::CM),
    (0x06DD, 0x06DE, L::AL),
    (0x06DF, 0x06E4, L::CM),
    (0x06E5, 0x06E6, L::AL),
    (0x06E7, 0x06E8, L::CM),
    (0x06E9, 0x06E9, L::AL),
    (0x06EA, 0x06ED, L::CM),
    (0x06EE, 0x06EF, L::AL),
    (0x06F0, 0x06F9, L::NU),
    (0x06FA, 0x070D, L::AL),
    (0x070F, 0x0710, L::AL),
    (0x0711, 0x0711, L::CM),
    (0x0712, 0x072F, L::AL),
    (0x0730, 0x074A, L::CM),
    (0x074D, 0x07A5, L::AL),
    (0x07A6, 0x07B0, L::CM),
    (0x07B1, 0x07B1, L::AL),
    (0x07C0, 0x07C9, L::NU),
    (0x07CA, 0x07EA, L::AL),
    (0x07EB, 0x07F3, L::CM),
    (0x07F4, 0x07F7, L::AL),
    (0x07F8, 0x07F8, L::IS),
    (0x07F9, 0x07F9, L::EX),
    (0x07FA, 0x07FA, L::AL),
    (0x07FD, 0x07FD, L::CM),
    (0x07FE, 0x07FF, L::PR),
    (0x0800, 0x0815, L::AL),
    (0x0816, 0x0819, L::CM),
    (0x081A, 0x081A, L::AL),
    (0x081B, 0x0823, L::CM),
    (0x0824, 0x0824, L::AL),
    (0x0825, 0x0827, L::CM),
    (0x0828, 0x0828, L::AL),
    (0x0829, 0x082D, L::CM),
    (0x0830, 0x083E, L::AL),
    (0x0840, 0x0858, L::AL),
    (0x0859, 0x085B, L::CM),
    (0x085E, 0x085E, L::AL),
    (0x0860, 0x086A, L::AL),
    (0x0870, 0x088E, L::AL),
    (0x0890, 0x0891, L::AL),
    (0x0898, 0x089F, L::CM),
    (0x08A0, 0x08C9, L::AL),
    (0x08CA, 0x08E1, L::CM),
    (0x08E2, 0x08E2, L::AL),
    (0x08E3, 0x0903, L::CM),
    (0x0904, 0x0939, L::AL),
    (0x093A, 0x093C, L::CM),
    (0x093D, 0x093D, L::AL),
    (0x093E, 0x094F, L::CM),
    (0x0950, 0x0950, L::AL),
    (0x0951, 0x0957, L::CM),
    (0x0958, 0x0961, L::AL),
    (0x0962, 0x0963, L::CM),
    (0x0964, 0x0965, L::BA),
    (0x0966, 0x096F, L::NU),
    (0x0970, 0x0980, L::AL),
    (0x0981, 0x0983, L::CM),
    (0x0985, 0x098C, L::AL),
    (0x098F, 0x0990, L::AL),
    (0x0993, 0x09A8, L::AL),
    (0x09AA, 0x09B0, L::AL),
    (0x09B2, 0x09B2, L::AL),
    (0x09B6, 0x09B9, L::AL),
    (0x09BC, 0x09BC, L::CM),
    (0x09BD, 0x09BD, L::AL),
    (0x09BE, 0x09C4, L::CM),
    (0x09C7, 0x09C8, L::CM),
    (0x09CB, 0x09CD, L::CM),
    (0x09CE, 0x09CE, L::AL),
    (0x09D7, 0x09D7, L::CM),
    (0x09DC, 0x09DD, L::AL),
    (0x09DF, 0x09E1, L::AL),
    (0x09E2, 0x09E3, L::CM),
    (0x09E6, 0x09EF, L::NU),
    (0x09F0, 0x09F1, L::AL),
    (0x09F2, 0x09F3, L::PO),
    (0x09F4, 0x09F8, L::AL),
    (0x09F9, 0x09F9, L::PO),
    (0x09FA, 0x09FA, L::AL),
    (0x09FB, 0x09FB, L::PR),
    (0x09FC, 0x09FD, L::AL),
    (0x09FE, 0x09FE, L::CM),
    (0x0A01, 0x0A03, L::CM),
    (0x0A05, 0x0A0A, L::AL),
    (0x0A0F, 0x0A10, L::AL),
    (0x0A13, 0x0A28, L::AL),
    (0x0A2A, 0x0A30, L::AL),
    (0x0A32, 0x0A33, L::AL),
    (0x0A35, 0x0A36, L::AL),
    (0x0A38, 0x0A39, L::AL),
    (0x0A3C, 0x0A3C, L::CM),
    (0x0A3E, 0x0A42, L::CM),
    (0x0A47, 0x0A48, L::CM),
    (0x0A4B, 0x0A4D, L::CM),
    (0x0A51, 0x0A51, L::CM),
    (0x0A59, 0x0A5C, L::AL),
    (0x0A5E, 0x0A5E, L::AL),
    (0x0A66, 0x0A6F, L::NU),
    (0x0A70, 0x0A71, L::CM),
    (0x0A72, 0x0A74, L::AL),
    (0x0A75, 0x0A75, L::CM),
    (0x0A76, 0x0A76, L::AL),
    (0x0A81, 0x0A83, L::CM),
    (0x0A85, 0x0A8D, L::AL),
    (0x0A8F, 0x0A91, L::AL),
    (0x0A93, 0x0AA8, L::AL),
    (0x0AAA, 0x0AB0, L::AL),
    (0x0AB2, 0x0AB3, L::AL),
    (0x0AB5, 0x0AB9, L::AL),
    (0x0ABC, 0x0ABC, L::CM),
    (0x0ABD, 0x0ABD, L::AL),
    (0x0ABE, 0x0AC5, L::CM),
    (0x0AC7, 0x0AC9, L::CM),
    (0x0ACB, 0x0ACD, L::CM),
    (0x0AD0, 0x0AD0, L::AL),
    (0x0AE0, 0x0AE1, L::AL),
    (0x0AE2, 0x0AE3, L::CM),
    (0x0AE6, 0x0AEF, L::NU),
    (0x0AF0, 0x0AF0, L::AL),
    (0x0AF1, 0x0AF1, L::PR),
    (0x0AF9, 0x0AF9, L::AL),
    (0x0AFA, 0x0AFF, L::CM),
    (0x0B01, 0x0B03, L::CM),
    (0x0B05, 0x0B0C, L::AL),
    (0x0B0F, 0x0B10, L::AL),
    (0x0B13, 0x0B28, L::AL),
    (0x0B2A, 0x0B30, L::AL),
    (0x0B32, 0x0B33, L::AL),
    (0x0B35, 0x0B39, L::AL),
    (0x0B3C, 0x0B3C, L::CM),
    (0x0B3D, 0x0B3D, L::AL),
    (0x0B3E, 0x0B44, L::CM),
    (0x0B47, 0x0B48, L::CM),
    (0x0B4B, 0x0B4D, L::CM),
    (0x0B55, 0x0B57, L::CM),
    (0x0B5C, 0x0B5D, L::AL),
    (0x0B5F, 0x0B61, L::AL),
    (0x0B62, 0x0B63, L::CM),
    (0x0B66, 0x0B6F, L::NU),
    (0x0B70, 0x0B77, L::AL),
    (0x0B82, 0x0B82, L::CM),
    (0x0B83, 0x0B83, L::AL),
    (0x0B85, 0x0B8A, L::AL),
    (0x0B8E, 0x0B90, L::AL),
    (0x0B92, 0x0B95, L::AL),
    (0x0B99, 0x0B9A, L::AL),
    (0x0B9C, 0x0B9C, L::AL),
    (0x0B9E, 0x0B9F, L::AL),
    (0x0BA3, 0x0BA4, L::AL),
    (0x0BA8, 0x0BAA, L::AL),
    (0x0BAE, 0x0BB9, L::AL),
    (0x0BBE, 0x0BC2, L::CM),
    (0x0BC6, 0x0BC8, L::CM),
    (0x0BCA, 0x0BCD, L::CM),
    (0x0BD0, 0x0BD0, L::AL),
    (0x0BD7, 0x0BD7, L::CM),
    (0x0BE6, 0x0BEF, L::NU),
    (0x0BF0, 0x0BF8, L::AL),
    (0x0BF9, 0x0BF9, L::PR),
    (0x0BFA, 0x0BFA, L::AL),
    (0x0C00, 0x0C04, L::CM),
    (0x0C05, 0x0C0C, L::AL),
    (0x0C0E, 0x0C10, L::AL),
    (0x0C12, 0x0C28, L::AL),
    (0x0C2A, 0x0C39, L::AL),
    (0x0C3C, 0x0C3C, L::CM),
    (0x0C3D, 0x0C3D, L::AL),
    (0x0C3E, 0x0C44, L::CM),
    (0x0C46, 0x0C48, L::CM),
    (0x0C4A, 0x0C4D, L::CM),
    (0x0C55, 0x0C56, L::CM),
    (0x0C58, 0x0C5A, L::AL),
    (0x0C5D, 0x0C5D, L::AL),
    (0x0C60, 0x0C61, L::AL),
    (0x0C62, 0x0C63, L::CM),
    (0x0C66, 0x0C6F, L::NU),
    (0x0C77, 0x0C77, L::BB),
    (0x0C78, 0x0C80, L::AL),
    (0x0C81, 0x0C83, L::CM),
    (0x0C84, 0x0C84, L::BB),
    (0x0C85, 0x0C8C, L::AL),
    (0x0C8E, 0x0C90, L::AL),
    (0x0C92, 0x0CA8, L::AL),
    (0x0CAA, 0x0CB3, L::AL),
    (0x0CB5, 0x0CB9, L::AL),
    (0x0CBC, 0x0CBC, L::CM),
    (0x0CBD, 0x0CBD, L::AL),
    (0x0CBE, 0x0CC4, L::CM),
    (0x0CC6, 0x0CC8, L::CM),
    (0x0CCA, 0x0CCD, L::CM),
    (0x0CD5, 0x0CD6, L::CM),
    (0x0CDD, 0x0CDE, L::AL),
    (0x0CE0, 0x0CE1, L::AL),
    (0x0CE2, 0x0CE3, L::CM),
    (0x0CE6, 0x0CEF, L::NU),
    (0x0CF1, 0x0CF2, L::AL),
    (0x0D00, 0x0D03, L::CM),
    (0x0D04, 0x0D0C, L::AL),
    (0x0D0E, 0x0D10, L::AL),
    (0x0D12, 0x0D3A, L::AL),
    (0x0D3B, 0x0D3C, L::CM),
    (0x0D3D, 0x0D3D, L::AL),
    (0x0D3E, 0x0D44, L::CM),
    (0x0D46, 0x0D48, L::CM),
    (0x0D4A, 0x0D4D, L::CM),
    (0x0D4E, 0x0D4F, L::AL),
    (0x0D54, 0x0D56, L::AL),
    (0x0D57, 0x0D57, L::CM),
    (0x0D58, 0x0D61, L::AL),
    (0x0D62, 0x0D63, L::CM),
    (0x0D66, 0x0D6F, L::NU),
    (0x0D70, 0x0D78, L::AL),
    (0x0D79, 0x0D79, L::PO),
    (0x0D7A, 0x0D7F, L::AL),
    (0x0D81, 0x0D83, L::CM),
    (0x0D85, 0x0D96, L::AL),
    (0x0D9A, 0x0DB1, L::AL),
    (0x0DB3, 0x0DBB, L::AL),
    (0x0DBD, 0x0DBD, L::AL),
    (0x0DC0, 0x0DC6, L::AL),
    (0x0DCA, 0x0DCA, L::CM),
    (0x0DCF, 0x0DD4, L::CM),
    (0x0DD6, 0x0DD6, L::CM),
    (0x0DD8, 0x0DDF, L::CM),
    (0x0DE6, 0x0DEF, L::NU),
    (0x0DF2, 0x0DF3, L::CM),
    (0x0DF4, 0x0DF4, L::AL),
    (0x0E01, 0x0E3A, L::SA),
    (0x0E3F, 0x0E3F, L::PR),
    (0x0E40, 0x0E4E, L::SA),
    (0x0E4F, 0x0E4F, L::AL),
    (0x0E50, 0x0E59, L::NU),
    (0x0E5A, 0x0E5B, L::BA),
    (0x0E81, 0x0E82, L::SA),
    (0x0E84, 0x0E84, L::SA),
    (0x0E86, 0x0E8A, L::SA),
    (0x0E8C, 0x0EA3, L::SA),
    (0x0EA5, 0x0EA5, L::SA),
    (0x0EA7, 0x0EBD, L::SA),
    (0x0EC0, 0x0EC4, L::SA),
    (0x0EC6, 0x0EC6, L::SA),
    (0x0EC8, 0x0ECD, L::SA),
    (0x0ED0, 0x0ED9, L::NU),
    (0x0EDC, 0x0EDF, L::SA),
    (0x0F00, 0x0F00, L::AL),
    (0x0F01, 0x0F04, L::BB),
    (0x0F05, 0x0F05, L::AL),
    (0x0F06, 0x0F07, L::BB),
    (0x0F08, 0x0F08, L::GL),
    (0x0F09, 0x0F0A, L::BB),
    (0x0F0B, 0x0F0B, L::BA),
    (0x0F0C, 0x0F0C, L::GL),
    (0x0F0D, 0x0F11, L::EX),
    (0x0F12, 0x0F12, L::GL),
    (0x0F13, 0x0F13, L::AL),
    (0x0F14, 0x0F14, L::EX),
    (0x0F15, 0x0F17, L::AL),
    (0x0F18, 0x0F19, L::CM),
    (0x0F1A, 0x0F1F, L::AL),
    (0x0F20, 0x0F29, L::NU),
    (0x0F2A, 0x0F33, L::AL),
    (0x0F34, 0x0F34, L::BA),
    (0x0F35, 0x0F35, L::CM),
    (0x0F36, 0x0F36, L::AL),
    (0x0F37, 0x0F37, L::CM),
    (0x0F38, 0x0F38, L::AL),
    (0x0F39, 0x0F39, L::CM),
    (0x0F3A, 0x0F3A, L::OP),
    (0x0F3B, 0x0F3B, L::CL),
    (0x0F3C, 0x0F3C, L::OP),
    (0x0F3D, 0x0F3D, L::CL),
    (0x0F3E, 0x0F3F, L::CM),
    (0x0F40, 0x0F47, L::AL),
    (0x0F49, 0x0F6C, L::AL),
    (0x0F71, 0x0F7E, L::CM),
    (0x0F7F, 0x0F7F, L::BA),
    (0x0F80, 0x0F84, L::CM),
    (0x0F85, 0x0F85, L::BA),
    (0x0F86, 0x0F87, L::CM),
    (0x0F88, 0x0F8C, L::AL),
    (0x0F8D, 0x0F97, L::CM),
    (0x0F99, 0x0FBC, L::CM),
    (0x0FBE, 0x0FBF, L::BA),
    (0x0FC0, 0x0FC5, L::AL),
    (0x0FC6, 0x0FC6, L::CM),
    (0x0FC7, 0x0FCC, L::AL),
    (0x0FCE, 0x0FCF, L::AL),
    (0x0FD0, 0x0FD1, L::BB),
    (0x0FD2, 0x0FD2, L::BA),
    (0x0FD3, 0x0FD3, L::BB),
    (0x0FD4, 0x0FD8, L::AL),
    (0x0FD9, 0x0FDA, L::GL),
    (0x1000, 0x103F, L::SA),
    (0x1040, 0x1049, L::NU),
    (0x104A, 0x104B, L::BA),
    (0x104C, 0x104F, L::AL),
    (0x1050, 0x108F, L::SA),
    (0x1090, 0x1099, L::NU),
    (0x109A, 0x109F, L::SA),
    (0x10A0, 0x10C5, L::AL),
    (0x10C7, 0x10C7, L::AL),
    (0x10CD, 0x10CD, L::AL),
    (0x10D0, 0x10FF, L::AL),
    (0x1100, 0x115F, L::JL),
    (0x1160, 0x11A7, L::JV),
    (0x11A8, 0x11FF, L::JT),
    (0x1200, 0x1248, L::AL),
    (0x124A, 0x124D, L::AL),
    (0x1250, 0x1256, L::AL),
    (0x1258, 0x1258, L::AL),
    (0x125A, 0x125D, L::AL),
    (0x1260, 0x1288, L::AL),
    (0x128A, 0x128D, L::AL),
    (0x1290, 0x12B0, L::AL),
    (0x12B2, 0x12B5, L::AL),
    (0x12B8, 0x12BE, L::AL),
    (0x12C0, 0x12C0, L::AL),
    (0x12C2, 0x12C5, L::AL),
    (0x12C8, 0x12D6, L::AL),
    (0x12D8, 0x1310, L::AL),
    (0x1312, 0x1315, L::AL),
    (0x1318, 0x135A, L::AL),
    (0x135D, 0x135F, L::CM),
    (0x1360, 0x1360, L::AL),
    (0x1361, 0x1361, L::BA),
    (0x1362, 0x137C, L::AL),
    (0x1380, 0x1399, L::AL),
    (0x13A0, 0x13F5, L::AL),
    (0x13F8, 0x13FD, L::AL),
    (0x1400, 0x1400, L::BA),
    (0x1401, 0x167F, L::AL),
    (0x1680, 0x1680, L::BA),
    (0x1681, 0x169A, L::AL),
    (0x169B, 0x169B, L::OP),
    (0x169C, 0x169C, L::CL),
    (0x16A0, 0x16EA, L::AL),
    (0x16EB, 0x16ED, L::BA),
    (0x16EE, 0x16F8, L::AL),
    (0x1700, 0x1711, L::AL),
    (0x1712, 0x1715, L::CM),
    (0x171F, 0x1731, L::AL),
    (0x1732, 0x1734, L::CM),
    (0x1735, 0x1736, L::BA),
    (0x1740, 0x1751, L::AL),
    (0x1752, 0x1753, L::CM),
    (0x1760, 0x176C, L::AL),
    (0x176E, 0x1770, L::AL),
    (0x1772, 0x1773, L::CM),
    (0x1780, 0x17D3, L::SA),
    (0x17D4, 0x17D5, L::BA),
    (0x17D6, 0x17D6, L::NS),
    (0x17D7, 0x17D7, L::SA),
    (0x17D8, 0x17D8, L::BA),
    (0x17D9, 0x17D9, L::AL),
    (0x17DA, 0x17DA, L::BA),
    (0x17DB, 0x17DB, L::PR),
    (0x17DC, 0x17DD, L::SA),
    (0x17E0, 0x17E9, L::NU),
    (0x17F0, 0x17F9, L::AL),
    (0x1800, 0x1801, L::AL),
    (0x1802, 0x1803, L::EX),
    (0x1804, 0x1805, L::BA),
    (0x1806, 0x1806, L::BB),
    (0x1807, 0x1807, L::AL),
    (0x1808, 0x1809, L::EX),
    (0x180A, 0x180A, L::AL),
    (0x180B, 0x180D, L::CM),
    (0x180E, 0x180E, L::GL),
    (0x180F, 0x180F, L::CM),
    (0x1810, 0x1819, L::NU),
    (0x1820, 0x1878, L::AL),
    (0x1880, 0x1884, L::AL),
    (0x1885, 0x1886, L::CM),
    (0x1887, 0x18A8, L::AL),
    (0x18A9, 0x18A9, L::CM),
    (0x18AA, 0x18AA, L::AL),
    (0x18B0, 0x18F5, L::AL),
    (0x1900, 0x191E, L::AL),
    (0x1920, 0x192B, L::CM),
    (0x1930, 0x193B, L::CM),
    (0x1940, 0x1940, L::AL),
    (0x1944, 0x1945, L::EX),
    (0x1946, 0x194F, L::NU),
    (0x1950, 0x196D, L::SA),
    (0x1970, 0x1974, L::SA),
    (0x1980, 0x19AB, L::SA),
    (0x19B0, 0x19C9, L::SA),
    (0x19D0, 0x19D9, L::NU),
    (0x19DA, 0x19DA, L::SA),
    (0x19DE, 0x19DF, L::SA),
    (0x19E0, 0x1A16, L::AL),
    (0x1A17, 0x1A1B, L::CM),
    (0x1A1E, 0x1A1F, L::AL),
    (0x1A20, 0x1A5E, L::SA),
    (0x1A60, 0x1A7C, L::SA),
    (0x1A7F, 0x1A7F, L::CM),
    (0x1A80, 0x1A89, L::NU),
    (0x1A90, 0x1A99, L::NU),
    (0x1AA0, 0x1AAD, L::SA),
    (0x1AB0, 0x1ACE, L::CM),
    (0x1B00, 0x1B04, L::CM),
    (0x1B05, 0x1B33, L::AL),
    (0x1B34, 0x1B44, L::CM),
    (0x1B45, 0x1B4C, L::AL),
    (0x1B50, 0x1B59, L::NU),
    (0x1B5A, 0x1B5B, L::BA),
    (0x1B5C, 0x1B5C, L::AL),
    (0x1B5D, 0x1B60, L::BA),
    (0x1B61, 0x1B6A, L::AL),
    (0x1B6B, 0x1B73, L::CM),
    (0x1B74, 0x1B7C, L::AL),
    (0x1B7D, 0x1B7E, L::BA),
    (0x1B80, 0x1B82, L::CM),
    (0x1B83, 0x1BA0, L::AL),
    (0x1BA1, 0x1BAD, L::CM),
    (0x1BAE, 0x1BAF, L::AL),
    (0x1BB0, 0x1BB9, L::NU),
    (0x1BBA, 0x1BE5, L::AL),
    (0x1BE6, 0x1BF3, L::CM),
    (0x1BFC, 0x1C23, L::AL),
    (0x1C24, 0x1C37, L::CM),
    (0x1C3B, 0x1C3F, L::BA),
    (0x1C40, 0x1C49, L::NU),
    (0x1C4D, 0x1C4F, L::AL),
    (0x1C50, 0x1C59, L::NU),
    (0x1C5A, 0x1C7D, L::AL),
    (0x1C7E, 0x1C7F, L::BA),
    (0x1C80, 0x1C88, L::AL),
    (0x1C90, 0x1CBA, L::AL),
    (0x1CBD, 0x1CC7, L::AL),
    (0x1CD0, 0x1CD2, L::CM),
    (0x1CD3, 0x1CD3, L::AL),
    (0x1CD4, 0x1CE8, L::CM),
    (0x1CE9, 0x1CEC, L::AL),
    (0x1CED, 0x1CED, L::CM),
    (0x1CEE, 0x1CF3, L::AL),
    (0x1CF4, 0x1CF4, L::CM),
    (0x1CF5, 0x1CF6, L::AL),
    (0x1CF7, 0x1CF9, L::CM),
    (0x1CFA, 0x1CFA, L::AL),
    (0x1D00, 0x1DBF, L::AL),
    (0x1DC0, 0x1DFF, L::CM),
    (0x1E00, 0x1F15, L::AL),
    (0x1F18, 0x1F1D, L::AL),
    (0x1F20, 0x1F45, L::AL),
    (0x1F48, 0x1F4D, L::AL),
    (0x1F50, 0x1F57, L::AL),
    (0x1F59, 0x1F59, L::AL),
    (0x1F5B, 0x1F5B, L::AL),
    (0x1F5D, 0x1F5D, L::AL),
    (0x1F5F, 0x1F7D, L::AL),
    (0x1F80, 0x1FB4, L::AL),
    (0x1FB6, 0x1FC4, L::AL),
    (0x1FC6, 0x1FD3, L::AL),
    (0x1FD6, 0x1FDB, L::AL),
    (0x1FDD, 0x1FEF, L::AL),
    (0x1FF2, 0x1FF4, L::AL),
    (0x1FF6, 0x1FFC, L::AL),
    (0x1FFD, 0x1FFD, L::BB),
    (0x1FFE, 0x1FFE, L::AL),
    (0x2000, 0x2006, L::BA),
    (0x2007, 0x2007, L::GL),
    (0x2008, 0x200A, L::BA),
    (0x200B, 0x200B, L::ZW),
    (0x200C, 0x200C, L::CM),
    (0x200D, 0x200D, L::ZWJ),
    (0x200E, 0x200F, L::CM),
    (0x2010, 0x2010, L::BA),
    (0x2011, 0x2011, L::GL),
    (0x2012, 0x2013, L::BA),
    (0x2014, 0x2014, L::B2),
    (0x2015, 0x2016, L::AI),
    (0x2017, 0x2017, L::AL),
    (0x2018, 0x2019, L::QU),
    (0x201A, 0x201A, L::OP),
    (0x201B, 0x201D, L::QU),
    (0x201E, 0x201E, L::OP),
    (0x201F, 0x201F, L::QU),
    (0x2020, 0x2021, L::AI),
    (0x2022, 0x2023, L::AL),
    (0x2024, 0x2026, L::IN),
    (0x2027, 0x2027, L::BA),
    (0x2028, 0x2029, L::BK),
    (0x202A, 0x202E, L::CM),
    (0x202F, 0x202F, L::GL),
    (0x2030, 0x2037, L::PO),
    (0x2038, 0x2038, L::AL),
    (0x2039, 0x203A, L::QU),
    (0x203B, 0x203B, L::AI),
    (0x203C, 0x203D, L::NS),
    (0x203E, 0x2043, L::AL),
    (0x2044, 0x2044, L::IS),
    (0x2045, 0x2045, L::OP),
    (0x2046, 0x2046, L::CL),
    (0x2047, 0x2049, L::NS),
    (0x204A, 0x2055, L::AL),
    (0x2056, 0x2056, L::BA),
    (0x2057, 0x2057, L::AL),
    (0x2058, 0x205B, L::BA),
    (0x205C, 0x205C, L::AL),
    (0x205D, 0x205F, L::BA),
    (0x2060, 0x2060, L::WJ),
    (0x2061, 0x2064, L::AL),
    (0x2066, 0x206F, L::CM),
    (0x2070, 0x2071, L::AL),
    (0x2074, 0x2074, L::AI),
    (0x2075, 0x207C, L::AL),
    (0x207D, 0x207D, L::OP),
    (0x207E, 0x207E, L::CL),
    (0x207F, 0x207F, L::AI),
    (0x2080, 0x2080, L::AL),
    (0x2081, 0x2084, L::AI),
    (0x2085, 0x208C, L::AL),
    (0x208D, 0x208D, L::OP),
    (0x208E, 0x208E, L::CL),
    (0x2090, 0x209C, L::AL),
    (0x20A0, 0x20A6, L::PR),
    (0x20A7, 0x20A7, L::PO),
    (0x20A8, 0x20B5, L::PR),
    (0x20B6, 0x20B6, L::PO),
    (0x20B7, 0x20BA, L::PR),
    (0x20BB, 0x20BB, L::PO),
    (0x20BC, 0x20BD, L::PR),
    (0x20BE, 0x20BE, L::PO),
    (0x20BF, 0x20BF, L::PR),
    (0x20C0, 0x20C0, L::PO),
    (0x20C1, 0x20CF, L::PR),
    (0x20D0, 0x20F0, L::CM),
    (0x2100, 0x2102, L::AL),
    (0x2103, 0x2103, L::PO),
    (0x2104, 0x2104, L::AL),
    (0x2105, 0x2105, L::AI),
    (0x2106, 0x2108, L::AL),
    (0x2109, 0x2109, L::PO),
    (0x210A, 0x2112, L::AL),
    (0x2113, 0x2113, L::AI),
    (0x2114, 0x2115, L::AL),
    (0x2116, 0x2116, L::PR),
    (0x2117, 0x2120, L::AL),
    (0x2121, 0x2122, L::AI),
    (0x2123, 0x212A, L::AL),
    (0x212B, 0x212B, L::AI),
    (0x212C, 0x2153, L::AL),
    (0x2154, 0x2155, L::AI),
    (0x2156, 0x215A, L::AL),
    (0x215B, 0x215B, L::AI),
    (0x215C, 0x215D, L::AL),
    (0x215E, 0x215E, L::AI),
    (0x215F, 0x215F, L::AL),
    (0x2160, 0x216B, L::AI),
    (0x216C, 0x216F, L::AL),
    (0x2170, 0x2179, L::AI),
    (0x217A, 0x2188, L::AL),
    (0x2189, 0x2189, L::AI),
    (0x218A, 0x218B, L::AL),
    (0x2190, 0x2199, L::AI),
    (0x219A, 0x21D1, L::AL),
    (0x21D2, 0x21D2, L::AI),
    (0x21D3, 0x21D3, L::AL),
    (0x21D4, 0x21D4, L::AI),
    (0x21D5, 0x21FF, L::AL),
    (0x2200, 0x2200, L::AI),
    (0x2201, 0x2201, L::AL),
    (0x2202, 0x2203, L::AI),
    (0x2204, 0x2206, L::AL),
    (0x2207, 0x2208, L::AI),
    (0x2209, 0x220A, L::AL),
    (0x220B, 0x220B, L::AI),
    (0x220C, 0x220E, L::AL),
    (0x220F, 0x220F, L::AI),
    (0x2210, 0x2210, L::AL),
    (0x2211, 0x2211, L::AI),
    (0x2212, 0x2213, L::PR),
    (0x2214, 0x2214, L::AL),
    (0x2215, 0x2215, L::AI),
    (0x2216, 0x2219, L::AL),
    (0x221A, 0x221A, L::AI),
    (0x221B, 0x221C, L::AL),
    (0x221D, 0x2220, L::AI),
    (0x2221, 0x2222, L::AL),
    (0x2223, 0x2223, L::AI),
    (0x2224, 0x2224, L::AL),
    (0x2225, 0x2225, L::AI),
    (0x2226, 0x2226, L::AL),
    (0x2227, 0x222C, L::AI),
    (0x222D, 0x222D, L::AL),
    (0x222E, 0x222E, L::AI),
    (0x222F, 0x2233, L::AL),
    (0x2234, 0x2237, L::AI),
    (0x2238, 0x223B, L::AL),
    (0x223C, 0x223D, L::AI),
    (0x223E, 0x2247, L::AL),
    (0x2248, 0x2248, L::AI),
    (0x2249, 0x224B, L::AL),
    (0x224C, 0x224C, L::AI),
    (0x224D, 0x2251, L::AL),
    (0x2252, 0x2252, L::AI),
    (0x2253, 0x225F, L::AL),
    (0x2260, 0x2261, L::AI),
    (0x2262, 0x2263, L::AL),
    (0x2264, 0x2267, L::AI),
    (0x2268, 0x2269, L::AL),
    (0x226A, 0x226B, L::AI),
    (0x226C, 0x226D, L::AL),
    (0x226E, 0x226F, L::AI),
    (0x2270, 0x2281, L::AL),
    (0x2282, 0x2283, L::AI),
    (0x2284, 0x2285, L::AL),
    (0x2286, 0x2287, L::AI),
    (0x2288, 0x2294, L::AL),
    (0x2295, 0x2295, L::AI),
    (0x2296, 0x2298, L::AL),
    (0x2299, 0x2299, L::AI),
    (0x229A, 0x22A4, L::AL),
    (0x22A5, 0x22A5, L::AI),
    (0x22A6, 0x22BE, L::AL),
    (0x22BF, 0x22BF, L::AI),
    (0x22C0, 0x22EE, L::AL),
    (0x22EF, 0x22EF, L::IN),
    (0x22F0, 0x2307, L::AL),
    (0x2308, 0x2308, L::OP),
    (0x2309, 0x2309, L::CL),
    (0x230A, 0x230A, L::OP),
    (0x230B, 0x230B, L::CL),
    (0x230C, 0x2311, L::AL),
    (0x2312, 0x2312, L::AI),
    (0x2313, 0x2319, L::AL),
    (0x231A, 0x231B, L::ID),
    (0x231C, 0x2328, L::AL),
    (0x2329, 0x2329, L::OP),
    (0x232A, 0x232A, L::CL),
    (0x232B, 0x23EF, L::AL),
    (0x23F0, 0x23F3, L::ID),
    (0x23F4, 0x2426, L::AL),
    (0x2440, 0x244A, L::AL),
    (0x2460, 0x24FE, L::AI),
    (0x24FF, 0x24FF, L::AL),
    (0x2500, 0x254B, L::AI),
    (0x254C, 0x254F, L::AL),
    (0x2550, 0x2574, L::AI),
    (0x2575, 0x257F, L::AL),
    (0x2580, 0x258F, L::AI),
    (0x2590, 0x2591, L::AL),
    (0x2592, 0x2595, L::AI),
    (0x2596, 0x259F, L::AL),
    (0x25A0, 0x25A1, L::AI),
    (0x25A2, 0x25A2, L::AL),
    (0x25A3, 0x25A9, L::AI),
    (0x25AA, 0x25B1, L::AL),
    (0x25B2, 0x25B3, L::AI),
    (0x25B4, 0x25B5, L::AL),
    (0x25B6, 0x25B7, L::AI),
    (0x25B8, 0x25BB, L::AL),
    (0x25BC, 0x25BD, L::AI),
    (0x25BE, 0x25BF, L::AL),
    (0x25C0, 0x25C1, L::AI),
    (0x25C2, 0x25C5, L::AL),
    (0x25C6, 0x25C8, L::AI),
    (0x25C9, 0x25CA, L::AL),
    (0x25CB, 0x25CB, L::AI),
    (0x25CC, 0x25CD, L::AL),
    (0x25CE, 0x25D1, L::AI),
    (0x25D2, 0x25E1, L::AL),
    (0x25E2, 0x25E5, L::AI),
    (0x25E6, 0x25EE, L::AL),
    (0x25EF, 0x25EF, L::AI),
    (0x25F0, 0x25FF, L::AL),
    (0x2600, 0x2603, L::ID),
    (0x2604, 0x2604, L::AL),
    (0x2605, 0x2606, L::AI),
    (0x2607, 0x2608, L::AL),
    (0x2609, 0x2609, L::AI),
    (0x260A, 0x260D, L::AL),
    (0x260E, 0x260F, L::AI),
    (0x2610, 0x2613, L::AL),
    (0x2614, 0x2615, L::ID),
    (0x2616, 0x2617, L::AI),
    (0x2618, 0x2618, L::ID),
    (0x2619, 0x2619, L::AL),
    (0x261A, 0x261C, L::ID),
    (0x261D, 0x261D, L::EB),
    (0x261E, 0x261F, L::ID),
    (0x2620, 0x2638, L::AL),
    (0x2639, 0x263B, L::ID),
    (0x263C, 0x263F, L::AL),
    (0x2640, 0x2640, L::AI),
    (0x2641, 0x2641, L::AL),
    (0x2642, 0x2642, L::AI),
    (0x2643, 0x265F, L::AL),
    (0x2660, 0x2661, L::AI),
    (0x2662, 0x2662, L::AL),
    (0x2663, 0x2665, L::AI),
    (0x2666, 0x2666, L::AL),
    (0x2667, 0x2667, L::AI),
    (0x2668, 0x2668, L::ID),
    (0x2669, 0x266A, L::AI),
    (0x266B, 0x266B, L::AL),
    (0x266C, 0x266D, L::AI),
    (0x266E, 0x266E, L::AL),
    (0x266F, 0x266F, L::AI),
    (0x2670, 0x267E, L::AL),
    (0x267F, 0x267F, L::ID),
    (0x2680, 0x269D, L::AL),
    (0x269E, 0x269F, L::AI),
    (0x26A0, 0x26BC, L::AL),
    (0x26BD, 0x26C8, L::ID),
    (0x26C9, 0x26CC, L::AI),
    (0x26CD, 0x26CD, L::ID),
    (0x26CE, 0x26CE, L::AL),
    (0x26CF, 0x26D1, L::ID),
    (0x26D2, 0x26D2, L::AI),
    (0x26D3, 0x26D4, L::ID),
    (0x26D5, 0x26D7, L::AI),
    (0x26D8, 0x26D9, L::ID),
    (0x26DA, 0x26DB, L::AI),
    (0x26DC, 0x26DC, L::ID),
    (0x26DD, 0x26DE, L::AI),
    (0x26DF, 0x26E1, L::ID),
    (0x26E2, 0x26E2, L::AL),
    (0x26E3, 0x26E3, L::AI),
    (0x26E4, 0x26E7, L::AL),
    (0x26E8, 0x26E9, L::AI),
    (0x26EA, 0x26EA, L::ID),
    (0x26EB, 0x26F0, L::AI),
    (0x26F1, 0x26F5, L::ID),
    (0x26F6, 0x26F6, L::AI),
    (0x26F7, 0x26F8, L::ID),
    (0x26F9, 0x26F9, L::EB),
    (0x26FA, 0x26FA, L::ID),
    (0x26FB, 0x26FC, L::AI),
    (0x26FD, 0x2704, L::ID),
    (0x2705, 0x2707, L::AL),
    (0x2708, 0x2709, L::ID),
    (0x270A, 0x270D, L::EB),
    (0x270E, 0x2756, L::AL),
    (0x2757, 0x2757, L::AI),
    (0x2758, 0x275A, L::AL),
    (0x275B, 0x2760, L::QU),
    (0x2761, 0x2761, L::AL),
    (0x2762, 0x2763, L::EX),
    (0x2764, 0x2764, L::ID),
    (0x2765, 0x2767, L::AL),
    (0x2768, 0x2768, L::OP),
    (0x2769, 0x2769, L::CL),
    (0x276A, 0x276A, L::OP),
    (0x276B, 0x276B, L::CL),
    (0x276C, 0x276C, L::OP),
    (0x276D, 0x276D, L::CL),
    (0x276E, 0x276E, L::OP),
    (0x276F, 0x276F, L::CL),
    (0x2770, 0x2770, L::OP),
    (0x2771, 0x2771, L::CL),
    (0x2772, 0x2772, L::OP),
    (0x2773, 0x2773, L::CL),
    (0x2774, 0x2774, L::OP),
    (0x2775, 0x2775, L::CL),
    (0x2776, 0x2793, L::AI),
    (0x2794, 0x27C4, L::AL),
    (0x27C5, 0x27C5, L::OP),
    (0x27C6, 0x27C6, L::CL),
    (0x27C7, 0x27E5, L::AL),
    (0x27E6, 0x27E6, L::OP),
    (0x27E7, 0x27E7, L::CL),
    (0x27E8, 0x27E8, L::OP),
    (0x27E9, 0x27E9, L::CL),
    (0x27EA, 0x27EA, L::OP),
    (0x27EB, 0x27EB, L::CL),
    (0x27EC, 0x27EC, L::OP),
    (0x27ED, 0x27ED, L::CL),
    (0x27EE, 0x27EE, L::OP),
    (0x27EF, 0x27EF, L::CL),
    (0x27F0, 0x2982, L::AL),
    (0x2983, 0x2983, L::OP),
    (0x2984, 0x2984, L::CL),
    (0x2985, 0x2985, L::OP),
    (0x2986, 0x2986, L::CL),
    (0x2987, 0x2987, L::OP),
    (0x2988, 0x2988, L::CL),
    (0x2989, 0x2989, L::OP),
    (0x298A, 0x298A, L::CL),
    (0x298B, 0x298B, L::OP),
    (0x298C, 0x298C, L::CL),
    (0x298D, 0x298D, L::OP),
    (0x298E, 0x298E, L::CL),
    (0x298F, 0x298F, L::OP),
    (0x2990, 0x2990, L::CL),
    (0x2991, 0x2991, L::OP),
    (0x2992, 0x2992, L::CL),
    (0x2993, 0x2993, L::OP),
    (0x2994, 0x2994, L::CL),
    (0x2995, 0x2995, L::OP),
    (0x2996, 0x2996, L::CL),
    (0x2997, 0x2997, L::OP),
    (0x2998, 0x2998, L::CL),
    (0x2999, 0x29D7, L::AL),
    (0x29D8, 0x29D8, L::OP),
    (0x29D9, 0x29D9, L::CL),
    (0x29DA, 0x29DA, L::OP),
    (0x29DB, 0x29DB, L::CL),
    (0x29DC, 0x29FB, L::AL),
    (0x29FC, 0x29FC, L::OP),
    (0x29FD, 0x29FD, L::CL),
    (0x29FE, 0x2B54, L::AL),
    (0x2B55, 0x2B59, L::AI),
    (0x2B5A, 0x2B73, L::AL),
    (0x2B76, 0x2B95, L::AL),
    (0x2B97, 0x2CEE, L::AL),
    (0x2CEF, 0x2CF1, L::CM),
    (0x2CF2, 0x2CF3, L::AL),
    (0x2CF9, 0x2CF9, L::EX),
    (0x2CFA, 0x2CFC, L::BA),
    (0x2CFD, 0x2CFD, L::AL),
    (0x2CFE, 0x2CFE, L::EX),
    (0x2CFF, 0x2CFF, L::BA),
    (0x2D00, 0x2D25, L::AL),
    (0x2D27, 0x2D27, L::AL),
    (0x2D2D, 0x2D2D, L::AL),
    (0x2D30, 0x2D67, L::AL),
    (0x2D6F, 0x2D6F, L::AL),
    (0x2D70, 0x2D70, L::BA),
    (0x2D7F, 0x2D7F, L::CM),
    (0x2D80, 0x2D96, L::AL),
    (0x2DA0, 0x2DA6, L::AL),
    (0x2DA8, 0x2DAE, L::AL),
    (0x2DB0, 0x2DB6, L::AL),
    (0x2DB8, 0x2DBE, L::AL),
    (0x2DC0, 0x2DC6, L::AL),
    (0x2DC8, 0x2DCE, L::AL),
    (0x2DD0, 0x2DD6, L::AL),
    (0x2DD8, 0x2DDE, L::AL),
    (0x2DE0, 0x2DFF, L::CM),
    (0x2E00, 0x2E0D, L::QU),
    (0x2E0E, 0x2E15, L::BA),
    (0x2E16, 0x2E16, L::AL),
    (0x2E17, 0x2E17, L::BA),
    (0x2E18, 0x2E18, L::OP),
    (0x2E19, 0x2E19, L::BA),
    (0x2E1A, 0x2E1B, L::AL),
    (0x2E1C, 0x2E1D, L::QU),
    (0x2E1E, 0x2E1F, L::AL),
    (0x2E20, 0x2E21, L::QU),
    (0x2E22, 0x2E22, L::OP),
    (0x2E23, 0x2E23, L::CL),
    (0x2E24, 0x2E24, L::OP),
    (0x2E25, 0x2E25, L::CL),
    (0x2E26, 0x2E26, L::OP),
    (0x2E27, 0x2E27, L::CL),
    (0x2E28, 0x2E28, L::OP),
    (0x2E29, 0x2E29, L::CL),
    (0x2E2A, 0x2E2D, L::BA),
    (0x2E2E, 0x2E2E, L::EX),
    (0x2E2F, 0x2E2F, L::AL),
    (0x2E30, 0x2E31, L::BA),
    (0x2E32, 0x2E32, L::AL),
    (0x2E33, 0x2E34, L::BA),
    (0x2E35, 0x2E39, L::AL),
    (0x2E3A, 0x2E3B, L::B2),
    (0x2E3C, 0x2E3E, L::BA),
    (0x2E3F, 0x2E3F, L::AL),
    (0x2E40, 0x2E41, L::BA),
    (0x2E42, 0x2E42, L::OP),
    (0x2E43, 0x2E4A, L::BA),
    (0x2E4B, 0x2E4B, L::AL),
    (0x2E4C, 0x2E4C, L::BA),
    (0x2E4D, 0x2E4D, L::AL),
    (0x2E4E, 0x2E4F, L::BA),
    (0x2E50, 0x2E52, L::AL),
    (0x2E53, 0x2E54, L::EX),
    (0x2E55, 0x2E55, L::OP),
    (0x2E56, 0x2E56, L::CL),
    (0x2E57, 0x2E57, L::OP),
    (0x2E58, 0x2E58, L::CL),
    (0x2E59, 0x2E59, L::OP),
    (0x2E5A, 0x2E5A, L::CL),
    (0x2E5B, 0x2E5B, L::OP),
    (0x2E5C, 0x2E5C, L::CL),
    (0x2E5D, 0x2E5D, L::BA),
    (0x2E80, 0x2E99, L::ID),
    (0x2E9B, 0x2EF3, L::ID),
    (0x2F00, 0x2FD5, L::ID),
    (0x2FF0, 0x2FFB, L::ID),
    (0x3000, 0x3000, L::BA),
    (0x3001, 0x3002, L::CL),
    (0x3003, 0x3004, L::ID),
    (0x3005, 0x3005, L::NS),
    (0x3006, 0x3007, L::ID),
    (0x3008, 0x3008, L::OP),
    (0x3009, 0x3009, L::CL),
    (0x300A, 0x300A, L::OP),
    (0x300B, 0x300B, L::CL),
    (0x300C, 0x300C, L::OP),
    (0x300D, 0x300D, L::CL),
    (0x300E, 0x300E, L::OP),
    (0x300F, 0x300F, L::CL),
    (0x3010, 0x3010, L::OP),
    (0x3011, 0x3011, L::CL),
    (0x3012, 0x3013, L::ID),
    (0x3014, 0x3014, L::OP),
    (0x3015, 0x3015, L::CL),
    (0x3016, 0x3016, L::OP),
    (0x3017, 0x3017, L::CL),
    (0x3018, 0x3018, L::OP),
    (0x3019, 0x3019, L::CL),
    (0x301A, 0x301A, L::OP),
    (0x301B, 0x301B, L::CL),
    (0x301C, 0x301C, L::NS),
    (0x301D, 0x301D, L::OP),
    (0x301E, 0x301F, L::CL),
    (0x3020, 0x3029, L::ID),
    (0x302A, 0x302F, L::CM),
    (0x3030, 0x3034, L::ID),
    (0x3035, 0x3035, L::CM),
    (0x3036, 0x303A, L::ID),
    (0x303B, 0x303C, L::NS),
    (0x303D, 0x303F, L::ID),
    (0x3041, 0x3041, L::CJ),
    (0x3042, 0x3042, L::ID),
    (0x3043, 0x3043, L::CJ),
    (0x3044, 0x3044, L::ID),
    (0x3045, 0x3045, L::CJ),
    (0x3046, 0x3046, L::ID),
    (0x3047, 0x3047, L::CJ),
    (0x3048, 0x3048, L::ID),
    (0x3049, 0x3049, L::CJ),
    (0x304A, 0x3062, L::ID),
    (0x3063, 0x3063, L::CJ),
    (0x3064, 0x3082, L::ID),
    (0x3083, 0x3083, L::CJ),
    (0x3084, 0x3084, L::ID),
    (0x3085, 0x3085, L::CJ),
    (0x3086, 0x3086, L::ID),
    (0x3087, 0x3087, L::CJ),
    (0x3088, 0x308D, L::ID),
    (0x308E, 0x308E, L::CJ),
    (0x308F, 0x3094, L::ID),
    (0x3095, 0x3096, L::CJ),
    (0x3099, 0x309A, L::CM),
    (0x309B, 0x309E, L::NS),
    (0x309F, 0x309F, L::ID),
    (0x30A0, 0x30A0, L::NS),
    (0x30A1, 0x30A1, L::CJ),
    (0x30A2, 0x30A2, L::ID),
    (0x30A3, 0x30A3, L::CJ),
    (0x30A4, 0x30A4, L::ID),
    (0x30A5, 0x30A5, L::CJ),
    (0x30A6, 0x30A6, L::ID),
    (0x30A7, 0x30A7, L::CJ),
    (0x30A8, 0x30A8, L::ID),
    (0x30A9, 0x30A9, L::CJ),
    (0x30AA, 0x30C2, L::ID),
    (0x30C3, 0x30C3, L::CJ),
    (0x30C4, 0x30E2, L::ID),
    (0x30E3, 0x30E3, L::CJ),
    (0x30E4, 0x30E4, L::ID),
    (0x30E5, 0x30E5, L::CJ),
    (0x30E6, 0x30E6, L::ID),
    (0x30E7, 0x30E7, L::CJ),
    (0x30E8, 0x30ED, L::ID),
    (0x30EE, 0x30EE, L::CJ),
    (0x30EF, 0x30F4, L::ID),
    (0x30F5, 0x30F6, L::CJ),
    (0x30F7, 0x30FA, L::ID),
    (0x30FB, 0x30FB, L::NS),
    (0x30FC, 0x30FC, L::CJ),
    (0x30FD, 0x30FE, L::NS),
    (0x30FF, 0x30FF, L::ID),
    (0x3105, 0x312F, L::ID),
    (0x3131, 0x318E, L::ID),
    (0x3190, 0x31E3, L::ID),
    (0x31F0, 0x31FF, L::CJ),
    (0x3200, 0x321E, L::ID),
    (0x3220, 0x3247, L::ID),
    (0x3248, 0x324F, L::AI),
    (0x3250, 0x4DBF, L::ID),
    (0x4DC0, 0x4DFF, L::AL),
    (0x4E00, 0xA014, L::ID),
    (0xA015, 0xA015, L::NS),
    (0xA016, 0xA48C, L::ID),
    (0xA490, 0xA4C6, L::ID),
    (0xA4D0, 0xA4FD, L::AL),
    (0xA4FE, 0xA4FF, L::BA),
    (0xA500, 0xA60C, L::AL),
    (0xA60D, 0xA60D, L::BA),
    (0xA60E, 0xA60E, L::EX),
    (0xA60F, 0xA60F, L::BA),
    (0xA610, 0xA61F, L::AL),
    (0xA620, 0xA629, L::NU),
    (0xA62A, 0xA62B, L::AL),
    (0xA640, 0xA66E, L::AL),
    (0xA66F, 0xA672, L::CM),
    (0xA673, 0xA673, L::AL),
    (0xA674, 0xA67D, L::CM),
    (0xA67E, 0xA69D, L::AL),
    (0xA69E, 0xA69F, L::CM),
    (0xA6A0, 0xA6EF, L::AL),
    (0xA6F0, 0xA6F1, L::CM),
    (0xA6F2, 0xA6F2, L::AL),
    (0xA6F3, 0xA6F7, L::BA),
    (0xA700, 0xA7CA, L::AL),
    (0xA7D0, 0xA7D1, L::AL),
    (0xA7D3, 0xA7D3, L::AL),
    (0xA7D5, 0xA7D9, L::AL),
    (0xA7F2, 0xA801, L::AL),
    (0xA802, 0xA802, L::CM),
    (0xA803, 0xA805, L::AL),
    (0xA806, 0xA806, L::CM),
    (0xA807, 0xA80A, L::AL),
    (0xA80B, 0xA80B, L::CM),
    (0xA80C, 0xA822, L::AL),
    (0xA823, 0xA827, L::CM),
    (0xA828, 0xA82B, L::AL),
    (0xA82C, 0xA82C, L::CM),
    (0xA830, 0xA837, L::AL),
    (0xA838, 0xA838, L::PO),
    (0xA839, 0xA839, L::AL),
    (0xA840, 0xA873, L::AL),
    (0xA874, 0xA875, L::BB),
    (0xA876, 0xA877, L::EX),
    (0xA880, 0xA881, L::CM),
    (0xA882, 0xA8B3, L::AL),
    (0xA8B4, 0xA8C5, L::CM),
    (0xA8CE, 0xA8CF, L::BA),
    (0xA8D0, 0xA8D9, L::NU),
    (0xA8E0, 0xA8F1, L::CM),
    (0xA8F2, 0xA8FB, L::AL),
    (0xA8FC, 0xA8FC, L::BB),
    (0xA8FD, 0xA8FE, L::AL),
    (0xA8FF, 0xA8FF, L::CM),
    (0xA900, 0xA909, L::NU),
    (0xA90A, 0xA925, L::AL),
    (0xA926, 0xA92D, L::CM),
    (0xA92E, 0xA92F, L::BA),
    (0xA930, 0xA946, L::AL),
    (0xA947, 0xA953, L::CM),
    (0xA95F, 0xA95F, L::AL),
    (0xA960, 0xA97C, L::JL),
    (0xA980, 0xA983, L::CM),
    (0xA984, 0xA9B2, L::AL),
    (0xA9B3, 0xA9C0, L::CM),
    (0xA9C1, 0xA9C6, L::AL),
    (0xA9C7, 0xA9C9, L::BA),
    (0xA9CA, 0xA9CD, L::AL),
    (0xA9CF, 0xA9CF, L::AL),
    (0xA9D0, 0xA9D9, L::NU),
    (0xA9DE, 0xA9DF, L::AL),
    (0xA9E0, 0xA9EF, L::SA),
    (0xA9F0, 0xA9F9, L::NU),
    (0xA9FA, 0xA9FE, L::SA),
    (0xAA00, 0xAA28, L::AL),
    (0xAA29, 0xAA36, L::CM),
    (0xAA40, 0xAA42, L::AL),
    (0xAA43, 0xAA43, L::CM),
    (0xAA44, 0xAA4B, L::AL),
    (0xAA4C, 0xAA4D, L::CM),
    (0xAA50, 0xAA59, L::NU),
    (0xAA5C, 0xAA5C, L::AL),
    (0xAA5D, 0xAA5F, L::BA),
    (0xAA60, 0xAAC2, L::SA),
    (0xAADB, 0xAADF, L::SA),
    (0xAAE0, 0xAAEA, L::AL),
    (0xAAEB, 0xAAEF, L::CM),
    (0xAAF0, 0xAAF1, L::BA),
    (0xAAF2, 0xAAF4, L::AL),
    (0xAAF5, 0xAAF6, L::CM),
    (0xAB01, 0xAB06, L::AL),
    (0xAB09, 0xAB0E, L::AL),
    (0xAB11, 0xAB16, L::AL),
    (0xAB20, 0xAB26, L::AL),
    (0xAB28, 0xAB2E, L::AL),
    (0xAB30, 0xAB6B, L::AL),
    (0xAB70, 0xABE2, L::AL),
    (0xABE3, 0xABEA, L::CM),
    (0xABEB, 0xABEB, L::BA),
    (0xABEC, 0xABED, L::CM),
    (0xABF0, 0xABF9, L::NU),
    (0xAC00, 0xAC00, L::H2),
    (0xAC01, 0xAC1B, L::H3),
    (0xAC1C, 0xAC1C, L::H2),
    (0xAC1D, 0xAC37, L::H3),
    (0xAC38, 0xAC38, L::H2),
    (0xAC39, 0xAC53, L::H3),
    (0xAC54, 0xAC54, L::H2),
    (0xAC55, 0xAC6F, L::H3),
    (0xAC70, 0xAC70, L::H2),
    (0xAC71, 0xAC8B, L::H3),
    (0xAC8C, 0xAC8C, L::H2),
    (0xAC8D, 0xACA7, L::H3),
    (0xACA8, 0xACA8, L::H2),
    (0xACA9, 0xACC3, L::H3),
    (0xACC4, 0xACC4, L::H2),
    (0xACC5, 0xACDF, L::H3),
    (0xACE0, 0xACE0, L::H2),
    (0xACE1, 0xACFB, L::H3),
    (0xACFC, 0xACFC, L::H2),
    (0xACFD, 0xAD17, L::H3),
    (0xAD18, 0xAD18, L::H2),
    (0xAD19, 0xAD33, L::H3),
    (0xAD34, 0xAD34, L::H2),
    (0xAD35, 0xAD4F, L::H3),
    (0xAD50, 0xAD50, L::H2),
    (0xAD51, 0xAD6B, L::H3),
    (0xAD6C, 0xAD6C, L::H2),
    (0xAD6D, 0xAD87, L::H3),
    (0xAD88, 0xAD88, L::H2),
    (0xAD89, 0xADA3, L::H3),
    (0xADA4, 0xADA4, L::H2),
    (0xADA5, 0xADBF, L::H3),
    (0xADC0, 0xADC0, L::H2),
    (0xADC1, 0xADDB, L::H3),
    (0xADDC, 0xADDC, L::H2),
    (0xADDD, 0xADF7, L::H3),
    (0xADF8, 0xADF8, L::H2),
    (0xADF9, 0xAE13, L::H3),
    (0xAE14, 0xAE14, L::H2),
    (0xAE15, 0xAE2F, L::H3),
    (0xAE30, 0xAE30, L::H2),
    (0xAE31, 0xAE4B, L::H3),
    (0xAE4C, 0xAE4C, L::H2),
    (0xAE4D, 0xAE67, L::H3),
    (0xAE68, 0xAE68, L::H2),
    (0xAE69, 0xAE83, L::H3),
    (0xAE84, 0xAE84, L::H2),
    (0xAE85, 0xAE9F, L::H3),
    (0xAEA0, 0xAEA0, L::H2),
    (0xAEA1, 0xAEBB, L::H3),
    (0xAEBC, 0xAEBC, L::H2),
    (0xAEBD, 0xAED7, L::H3),
    (0xAED8, 0xAED8, L::H2),
    (0xAED9, 0xAEF3, L::H3),
    (0xAEF4, 0xAEF4, L::H2),
    (0xAEF5, 0xAF0F, L::H3),
    (0xAF10, 0xAF10, L::H2),
    (0xAF11, 0xAF2B, L::H3),
    (0xAF2C, 0xAF2C, L::H2),
    (0xAF2D, 0xAF47, L::H3),
    (0xAF48, 0xAF48, L::H2),
    (0xAF49, 0xAF63, L::H3),
    (0xAF64, 0xAF64, L::H2),
    (0xAF65, 0xAF7F, L::H3),
    (0xAF80, 0xAF80, L::H2),
    (0xAF81, 0xAF9B, L::H3),
    (0xAF9C, 0xAF9C, L::H2),
    (0xAF9D, 0xAFB7, L::H3),
    (0xAFB8, 0xAFB8, L::H2),
    (0xAFB9, 0xAFD3, L::H3),
    (0xAFD4, 0xAFD4, L::H2),
    (0xAFD5, 0xAFEF, L::H3),
    (0xAFF0, 0xAFF0, L::H2),
    (0xAFF1, 0xB00B, L::H3),
    (0xB00C, 0xB00C, L::H2),
    (0xB00D, 0xB027, L::H3),
    (0xB028, 0xB028, L::H2),
    (0xB029, 0xB043, L::H3),
    (0xB044, 0xB044, L::H2),
    (0xB045, 0xB05F, L::H3),
    (0xB060, 0xB060, L::H2),
    (0xB061, 0xB07B, L::H3),
    (0xB07C, 0xB07C, L::H2),
    (0xB07D, 0xB097, L::H3),
    (0xB098, 0xB098, L::H2),
    (0xB099, 0xB0B3, L::H3),
    (0xB0B4, 0xB0B4, L::H2),
    (0xB0B5, 0xB0CF, L::H3),
    (0xB0D0, 0xB0D0, L::H2),
    (0xB0D1, 0xB0EB, L::H3),
    (0xB0EC, 0xB0EC, L::H2),
    (0xB0ED, 0xB107, L::H3),
    (0xB108, 0xB108, L::H2),
    (0xB109, 0xB123, L::H3),
    (0xB124, 0xB124, L::H2),
    (0xB125, 0xB13F, L::H3),
    (0xB140, 0xB140, L::H2),
    (0xB141, 0xB15B, L::H3),
    (0xB15C, 0xB15C, L::H2),
    (0xB15D, 0xB177, L::H3),
    (0xB178, 0xB178, L::H2),
    (0xB179, 0xB193, L::H3),
    (0xB194, 0xB194, L::H2),
    (0xB195, 0xB1AF, L::H3),
    (0xB1B0, 0xB1B0, L::H2),
    (0xB1B1, 0xB1CB, L::H3),
    (0xB1CC, 0xB1CC, L::H2),
    (0xB1CD, 0xB1E7, L::H3),
    (0xB1E8, 0xB1E8, L::H2),
    (0xB1E9, 0xB203, L::H3),
    (0xB204, 0xB204, L::H2),
    (0xB205, 0xB21F, L::H3),
    (0xB220, 0xB220, L::H2),
    (0xB221, 0xB23B, L::H3),
    (0xB23C, 0xB23C, L::H2),
    (0xB23D, 0xB257, L::H3),
    (0xB258, 0xB258, L::H2),
    (0xB259, 0xB273, L::H3),
    (0xB274, 0xB274, L::H2),
    (0xB275, 0xB28F, L::H3),
    (0xB290, 0xB290, L::H2),
    (0xB291, 0xB2AB, L::H3),
    (0xB2AC, 0xB2AC, L::H2),
    (0xB2AD, 0xB2C7, L::H3),
    (0xB2C8, 0xB2C8, L::H2),
    (0xB2C9, 0xB2E3, L::H3),
    (0xB2E4, 0xB2E4, L::H2),
    (0xB2E5, 0xB2FF, L::H3),
    (0xB300, 0xB300, L::H2),
    (0xB301, 0xB31B, L::H3),
    (0xB31C, 0xB31C, L::H2),
    (0xB31D, 0xB337, L::H3),
    (0xB338, 0xB338, L::H2),
    (0xB339, 0xB353, L::H3),
    (0xB354, 0xB354, L::H2),
    (0xB355, 0xB36F, L::H3),
    (0xB370, 0xB370, L::H2),
    (0xB371, 0xB38B, L::H3),
    (0xB38C, 0xB38C, L::H2),
    (0xB38D, 0xB3A7, L::H3),
    (0xB3A8, 0xB3A8, L::H2),
    (0xB3A9, 0xB3C3, L::H3),
    (0xB3C4, 0xB3C4, L::H2),
    (0xB3C5, 0xB3DF, L::H3),
    (0xB3E0, 0xB3E0, L::H2),
    (0xB3E1, 0xB3FB, L::H3),
    (0xB3FC, 0xB3FC, L::H2),
    (0xB3FD, 0xB417, L::H3),
    (0xB418, 0xB418, L::H2),
    (0xB419, 0xB433, L::H3),
    (0xB434, 0xB434, L::H2),
    (0xB435, 0xB44F, L::H3),
    (0xB450, 0xB450, L::H2),
    (0xB451, 0xB46B, L::H3),
    (0xB46C, 0xB46C, L::H2),
    (0xB46D, 0xB487, L::H3),
    (0xB488, 0xB488, L::H2),
    (0xB489, 0xB4A3, L::H3),
    (0xB4A4, 0xB4A4, L::H2),
    (0xB4A5, 0xB4BF, L::H3),
    (0xB4C0, 0xB4C0, L::H2),
    (0xB4C1, 0xB4DB, L::H3),
    (0xB4DC, 0xB4DC, L::H2),
    (0xB4DD, 0xB4F7, L::H3),
    (0xB4F8, 0xB4F8, L::H2),
    (0xB4F9, 0xB513, L::H3),
    (0xB514, 0xB514, L::H2),
    (0xB515, 0xB52F, L::H3),
    (0xB530, 0xB530, L::H2),
    (0xB531, 0xB54B, L::H3),
    (0xB54C, 0xB54C, L::H2),
    (0xB54D, 0xB567, L::H3),
    (0xB568, 0xB568, L::H2),
    (0xB569, 0xB583, L::H3),
    (0xB584, 0xB584, L::H2),
    (0xB585, 0xB59F, L::H3),
    (0xB5A0, 0xB5A0, L::H2),
    (0xB5A1, 0xB5BB, L::H3),
    (0xB5BC, 0xB5BC, L::H2),
    (0xB5BD, 0xB5D7, L::H3),
    (0xB5D8, 0xB5D8, L::H2),
    (0xB5D9, 0xB5F3, L::H3),
    (0xB5F4, 0xB5F4, L::H2),
    (0xB5F5, 0xB60F, L::H3),
    (0xB610, 0xB610, L::H2),
    (0xB611, 0xB62B, L::H3),
    (0xB62C, 0xB62C, L::H2),
    (0xB62D, 0xB647, L::H3),
    (0xB648, 0xB648, L::H2),
    (0xB649, 0xB663, L::H3),
    (0xB664, 0xB664, L::H2),
    (0xB665, 0xB67F, L::H3),
    (0xB680, 0xB680, L::H2),
    (0xB681, 0xB69B, L::H3),
    (0xB69C, 0xB69C, L::H2),
    (0xB69D, 0xB6B7, L::H3),
    (0xB6B8, 0xB6B8, L::H2),
    (0xB6B9, 0xB6D3, L::H3),
    (0xB6D4, 0xB6D4, L::H2),
    (0xB6D5, 0xB6EF, L::H3),
    (0xB6F0, 0xB6F0, L::H2),
    (0xB6F1, 0xB70B, L::H3),
    (0xB70C, 0xB70C, L::H2),
    (0xB70D, 0xB727, L::H3),
    (0xB728, 0xB728, L::H2),
    (0xB729, 0xB743, L::H3),
    (0xB744, 0xB744, L::H2),
    (0xB745, 0xB75F, L::H3),
    (0xB760, 0xB760, L::H2),
    (0xB761, 0xB77B, L::H3),
    (0xB77C, 0xB77C, L::H2),
    (0xB77D, 0xB797, L::H3),
    (0xB798, 0xB798, L::H2),
    (0xB799, 0xB7B3, L::H3),
    (0xB7B4, 0xB7B4, L::H2),
    (0xB7B5, 0xB7CF, L::H3),
    (0xB7D0, 0xB7D0, L::H2),
    (0xB7D1, 0xB7EB, L::H3),
    (0xB7EC, 0xB7EC, L::H2),
    (0xB7ED, 0xB807, L::H3),
    (0xB808, 0xB808, L::H2),
    (0xB809, 0xB823, L::H3),
    (0xB824, 0xB824, L::H2),
    (0xB825, 0xB83F, L::H3),
    (0xB840, 0xB840, L::H2),
    (0xB841, 0xB85B, L::H3),
    (0xB85C, 0xB85C, L::H2),
    (0xB85D, 0xB877, L::H3),
    (0xB878, 0xB878, L::H2),
    (0xB879, 0xB893, L::H3),
    (0xB894, 0xB894, L::H2),
    (0xB895, 0xB8AF, L::H3),
    (0xB8B0, 0xB8B0, L::H2),
    (0xB8B1, 0xB8CB, L::H3),
    (0xB8CC, 0xB8CC, L::H2),
    (0xB8CD, 0xB8E7, L::H3),
    (0xB8E8, 0xB8E8, L::H2),
    (0xB8E9, 0xB903, L::H3),
    (0xB904, 0xB904, L::H2),
    (0xB905, 0xB91F, L::H3),
    (0xB920, 0xB920, L::H2),
    (0xB921, 0xB93B, L::H3),
    (0xB93C, 0xB93C, L::H2),
    (0xB93D, 0xB957, L::H3),
    (0xB958, 0xB958, L::H2),
    (0xB959, 0xB973, L::H3),
    (0xB974, 0xB974, L::H2),
    (0xB975, 0xB98F, L::H3),
    (0xB990, 0xB990, L::H2),
    (0xB991, 0xB9AB, L::H3),
    (0xB9AC, 0xB9AC, L::H2),
    (0xB9AD, 0xB9C7, L::H3),
    (0xB9C8, 0xB9C8, L::H2),
    (0xB9C9, 0xB9E3, L::H3),
    (0xB9E4, 0xB9E4, L::H2),
    (0xB9E5, 0xB9FF, L::H3),
    (0xBA00, 0xBA00, L::H2),
    (0xBA01, 0xBA1B, L::H3),
    (0xBA1C, 0xBA1C, L::H2),
    (0xBA1D, 0xBA37, L::H3),
    (0xBA38, 0xBA38, L::H2),
    (0xBA39, 0xBA53, L::H3),
    (0xBA54, 0xBA54, L::H2),
    (0xBA55, 0xBA6F, L::H3),
    (0xBA70, 0xBA70, L::H2),
    (0xBA71, 0xBA8B, L::H3),
    (0xBA8C, 0xBA8C, L::H2),
    (0xBA8D, 0xBAA7, L::H3),
    (0xBAA8, 0xBAA8, L::H2),
    (0xBAA9, 0xBAC3, L::H3),
    (0xBAC4, 0xBAC4, L::H2),
    (0xBAC5, 0xBADF, L::H3),
    (0xBAE0, 0xBAE0, L::H2),
    (0xBAE1, 0xBAFB, L::H3),
    (0xBAFC, 0xBAFC, L::H2),
    (0xBAFD, 0xBB17, L::H3),
    (0xBB18, 0xBB18, L::H2),
    (0xBB19, 0xBB33, L::H3),
    (0xBB34, 0xBB34, L::H2),
    (0xBB35, 0xBB4F, L::H3),
    (0xBB50, 0xBB50, L::H2),
    (0xBB51, 0xBB6B, L::H3),
    (0xBB6C, 0xBB6C, L::H2),
    (0xBB6D, 0xBB87, L::H3),
    (0xBB88, 0xBB88, L::H2),
    (0xBB89, 0xBBA3, L::H3),
    (0xBBA4, 0xBBA4, L::H2),
    (0xBBA5, 0xBBBF, L::H3),
    (0xBBC0, 0xBBC0, L::H2),
    (0xBBC1, 0xBBDB, L::H3),
    (0xBBDC, 0xBBDC, L::H2),
    (0xBBDD, 0xBBF7, L::H3),
    (0xBBF8, 0xBBF8, L::H2),
    (0xBBF9, 0xBC13, L::H3),
    (0xBC14, 0xBC14, L::H2),
    (0xBC15, 0xBC2F, L::H3),
    (0xBC30, 0xBC30, L::H2),
    (0xBC31, 0xBC4B, L::H3),
    (0xBC4C, 0xBC4C, L::H2),
    (0xBC4D, 0xBC67, L::H3),
    (0xBC68, 0xBC68, L::H2),
    (0xBC69, 0xBC83, L::H3),
    (0xBC84, 0xBC84, L::H2),
    (0xBC85, 0xBC9F, L::H3),
    (0xBCA0, 0xBCA0, L::H2),
    (0xBCA1, 0xBCBB, L::H3),
    (0xBCBC, 0xBCBC, L::H2),
    (0xBCBD, 0xBCD7, L::H3),
    (0xBCD8, 0xBCD8, L::H2),
    (0xBCD9, 0xBCF3, L::H3),
    (0xBCF4, 0xBCF4, L::H2),
    (0xBCF5, 0xBD0F, L::H3),
    (0xBD10, 0xBD10, L::H2),
    (0xBD11, 0xBD2B, L::H3),
    (0xBD2C, 0xBD2C, L::H2),
    (0xBD2D, 0xBD47, L::H3),
    (0xBD48, 0xBD48, L::H2),
    (0xBD49, 0xBD63, L::H3),
    (0xBD64, 0xBD64, L::H2),
    (0xBD65, 0xBD7F, L::H3),
    (0xBD80, 0xBD80, L::H2),
    (0xBD81, 0xBD9B, L::H3),
    (0xBD9C, 0xBD9C, L::H2),
    (0xBD9D, 0xBDB7, L::H3),
    (0xBDB8, 0xBDB8, L::H2),
    (0xBDB9, 0xBDD3, L::H3),
    (0xBDD4, 0xBDD4, L::H2),
    (0xBDD5, 0xBDEF, L::H3),
    (0xBDF0, 0xBDF0, L::H2),
    (0xBDF1, 0xBE0B, L::H3),
    (0xBE0C, 0xBE0C, L::H2),
    (0xBE0D, 0xBE27, L::H3),
    (0xBE28, 0xBE28, L::H2),
    (0xBE29, 0xBE43, L::H3),
    (0xBE44, 0xBE44, L::H2),
    (0xBE45, 0xBE5F, L::H3),
    (0xBE60, 0xBE60, L::H2),
    (0xBE61, 0xBE7B, L::H3),
    (0xBE7C, 0xBE7C, L::H2),
    (0xBE7D, 0xBE97, L::H3),
    (0xBE98, 0xBE98, L::H2),
    (0xBE99, 0xBEB3, L::H3),
    (0xBEB4, 0xBEB4, L::H2),
    (0xBEB5, 0xBECF, L::H3),
    (0xBED0, 0xBED0, L::H2),
    (0xBED1, 0xBEEB, L::H3),
    (0xBEEC, 0xBEEC, L::H2),
    (0xBEED, 0xBF07, L::H3),
    (0xBF08, 0xBF08, L::H2),
    (0xBF09, 0xBF23, L::H3),
    (0xBF24, 0xBF24, L::H2),
    (0xBF25, 0xBF3F, L::H3),
    (0xBF40, 0xBF40, L::H2),
    (0xBF41, 0xBF5B, L::H3),
    (0xBF5C, 0xBF5C, L::H2),
    (0xBF5D, 0xBF77, L::H3),
    (0xBF78, 0xBF78, L::H2),
    (0xBF79, 0xBF93, L::H3),
    (0xBF94, 0xBF94, L::H2),
    (0xBF95, 0xBFAF, L::H3),
    (0xBFB0, 0xBFB0, L::H2),
    (0xBFB1, 0xBFCB, L::H3),
    (0xBFCC, 0xBFCC, L::H2),
    (0xBFCD, 0xBFE7, L::H3),
    (0xBFE8, 0xBFE8, L::H2),
    (0xBFE9, 0xC003, L::H3),
    (0xC004, 0xC004, L::H2),
    (0xC005, 0xC01F, L::H3),
    (0xC020, 0xC020, L::H2),
    (0xC021, 0xC03B, L::H3),
    (0xC03C, 0xC03C, L::H2),
    (0xC03D, 0xC057, L::H3),
    (0xC058, 0xC058, L::H2),
    (0xC059, 0xC073, L::H3),
    (0xC074, 0xC074, L::H2),
    (0xC075, 0xC08F, L::H3),
    (0xC090, 0xC090, L::H2),
    (0xC091, 0xC0AB, L::H3),
    (0xC0AC, 0xC0AC, L::H2),
    (0xC0AD, 0xC0C7, L::H3),
    (0xC0C8, 0xC0C8, L::H2),
    (0xC0C9, 0xC0E3, L::H3),
    (0xC0E4, 0xC0E4, L::H2),
    (0xC0E5, 0xC0FF, L::H3),
    (0xC100, 0xC100, L::H2),
    (0xC101, 0xC11B, L::H3),
    (0xC11C, 0xC11C, L::H2),
    (0xC11D, 0xC137, L::H3),
    (0xC138, 0xC138, L::H2),
    (0xC139, 0xC153, L::H3),
    (0xC154, 0xC154, L::H2),
    (0xC155, 0xC16F, L::H3),
    (0xC170, 0xC170, L::H2),
    (0xC171, 0xC18B, L::H3),
    (0xC18C, 0xC18C, L::H2),
    (0xC18D, 0xC1A7, L::H3),
    (0xC1A8, 0xC1A8, L::H2),
    (0xC1A9, 0xC1C3, L::H3),
    (0xC1C4, 0xC1C4, L::H2),
    (0xC1C5, 0xC1DF, L::H3),
    (0xC1E0, 0xC1E0, L::H2),
    (0xC1E1, 0xC1FB, L::H3),
    (0xC1FC, 0xC1FC, L::H2),
    (0xC1FD, 0xC217, L::H3),
    (0xC218, 0xC218, L::H2),
    (0xC219, 0xC233, L::H3),
    (0xC234, 0xC234, L::H2),
    (0xC235, 0xC24F, L::H3),
    (0xC250, 0xC250, L::H2),
    (0xC251, 0xC26B, L::H3),
    (0xC26C, 0xC26C, L::H2),
    (0xC26D, 0xC287, L::H3),
    (0xC288, 0xC288, L::H2),
    (0xC289, 0xC2A3, L::H3),
    (0xC2A4, 0xC2A4, L::H2),
    (0xC2A5, 0xC2BF, L::H3),
    (0xC2C0, 0xC2C0, L::H2),
    (0xC2C1, 0xC2DB, L::H3),
    (0xC2DC, 0xC2DC, L::H2),
    (0xC2DD, 0xC2F7, L::H3),
    (0xC2F8, 0xC2F8, L::H2),
    (0xC2F9, 0xC313, L::H3),
    (0xC314, 0xC314, L::H2),
    (0xC315, 0xC32F, L::H3),
    (0xC330, 0xC330, L::H2),
    (0xC331, 0xC34B, L::H3),
    (0xC34C, 0xC34C, L::H2),
    (0xC34D, 0xC367, L::H3),
    (0xC368, 0xC368, L::H2),
    (0xC369, 0xC383, L::H3),
    (0xC384, 0xC384, L::H2),
    (0xC385, 0xC39F, L::H3),
    (0xC3A0, 0xC3A0, L::H2),
    (0xC3A1, 0xC3BB, L::H3),
    (0xC3BC, 0xC3BC, L::H2),
    (0xC3BD, 0xC3D7, L::H3),
    (0xC3D8, 0xC3D8, L::H2),
    (0xC3D9, 0xC3F3, L::H3),
    (0xC3F4, 0xC3F4, L::H2),
    (0xC3F5, 0xC40F, L::H3),
    (0xC410, 0xC410, L::H2),
    (0xC411, 0xC42B, L::H3),
    (0xC42C, 0xC42C, L::H2),
    (0xC42D, 0xC447, L::H3),
    (0xC448, 0xC448, L::H2),
    (0xC449, 0xC463, L::H3),
    (0xC464, 0xC464, L::H2),
    (0xC465, 0xC47F, L::H3),
    (0xC480, 0xC480, L::H2),
    (0xC481, 0xC49B, L::H3),
    (0xC49C, 0xC49C, L::H2),
    (0xC49D, 0xC4B7, L::H3),
    (0xC4B8, 0xC4B8, L::H2),
    (0xC4B9, 0xC4D3, L::H3),
    (0xC4D4, 0xC4D4, L::H2),
    (0xC4D5, 0xC4EF, L::H3),
    (0xC4F0, 0xC4F0, L::H2),
    (0xC4F1, 0xC50B, L::H3),
    (0xC50C, 0xC50C, L::H2),
    (0xC50D, 0xC527, L::H3),
    (0xC528, 0xC528, L::H2),
    (0xC529, 0xC543, L::H3),
    (0xC544, 0xC544, L::H2),
    (0xC545, 0xC55F, L::H3),
    (0xC560, 0xC560, L::H2),
    (0xC561, 0xC57B, L::H3),
    (0xC57C, 0xC57C, L::H2),
    (0xC57D, 0xC597, L::H3),
    (0xC598, 0xC598, L::H2),
    (0xC599, 0xC5B3, L::H3),
    (0xC5B4, 0xC5B4, L::H2),
    (0xC5B5, 0xC5CF, L::H3),
    (0xC5D0, 0xC5D0, L::H2),
    (0xC5D1, 0xC5EB, L::H3),
    (0xC5EC, 0xC5EC, L::H2),
    (0xC5ED, 0xC607, L::H3),
    (0xC608, 0xC608, L::H2),
    (0xC609, 0xC623, L::H3),
    (0xC624, 0xC624, L::H2),
    (0xC625, 0xC63F, L::H3),
    (0xC640, 0xC640, L::H2),
    (0xC641, 0xC65B, L::H3),
    (0xC65C, 0xC65C, L::H2),
    (0xC65D, 0xC677, L::H3),
    (0xC678, 0xC678, L::H2),
    (0xC679, 0xC693, L::H3),
    (0xC694, 0xC694, L::H2),
    (0xC695, 0xC6AF, L::H3),
    (0xC6B0, 0xC6B0, L::H2),
    (0xC6B1, 0xC6CB, L::H3),
    (0xC6CC, 0xC6CC, L::H2),
    (0xC6CD, 0xC6E7, L::H3),
    (0xC6E8, 0xC6E8, L::H2),
    (0xC6E9, 0xC703, L::H3),
    (0xC704, 0xC704, L::H2),
    (0xC705, 0xC71F, L::H3),
    (0xC720, 0xC720, L::H2),
    (0xC721, 0xC73B, L::H3),
    (0xC73C, 0xC73C, L::H2),
    (0xC73D, 0xC757, L::H3),
    (0xC758, 0xC758, L::H2),
    (0xC759, 0xC773, L::H3),
    (0xC774, 0xC774, L::H2),
    (0xC775, 0xC78F, L::H3),
    (0xC790, 0xC790, L::H2),
    (0xC791, 0xC7AB, L::H3),
    (0xC7AC, 0xC7AC, L::H2),
    (0xC7AD, 0xC7C7, L::H3),
    (0xC7C8, 0xC7C8, L::H2),
    (0xC7C9, 0xC7E3, L::H3),
    (0xC7E4, 0xC7E4, L::H2),
    (0xC7E5, 0xC7FF, L::H3),
    (0xC800, 0xC800, L::H2),
    (0xC801, 0xC81B, L::H3),
    (0xC81C, 0xC81C, L::H2),
    (0xC81D, 0xC837, L::H3),
    (0xC838, 0xC838, L::H2),
    (0xC839, 0xC853, L::H3),
    (0xC854, 0xC854, L::H2),
    (0xC855, 0xC86F, L::H3),
    (0xC870, 0xC870, L::H2),
    (0xC871, 0xC88B, L::H3),
    (0xC88C, 0xC88C, L::H2),
    (0xC88D, 0xC8A7, L::H3),
    (0xC8A8, 0xC8A8, L::H2),
    (0xC8A9, 0xC8C3, L::H3),
    (0xC8C4, 0xC8C4, L::H2),
    (0xC8C5, 0xC8DF, L::H3),
    (0xC8E0, 0xC8E0, L::H2),
    (0xC8E1, 0xC8FB, L::H3),
    (0xC8FC, 0xC8FC, L::H2),
    (0xC8FD, 0xC917, L::H3),
    (0xC918, 0xC918, L::H2),
    (0xC919, 0xC933, L::H3),
    (0xC934, 0xC934, L::H2),
    (0xC935, 0xC94F, L::H3),
    (0xC950, 0xC950, L::H2),
    (0xC951, 0xC96B, L::H3),
    (0xC96C, 0xC96C, L::H2),
    (0xC96D, 0xC987, L::H3),
    (0xC988, 0xC988, L::H2),
    (0xC989, 0xC9A3, L::H3),
    (0xC9A4, 0xC9A4, L::H2),
    (0xC9A5, 0xC9BF, L::H3),
    (0xC9C0, 0xC9C0, L::H2),
    (0xC9C1, 0xC9DB, L::H3),
    (0xC9DC, 0xC9DC, L::H2),
    (0xC9DD, 0xC9F7, L::H3),
    (0xC9F8, 0xC9F8, L::H2),
    (0xC9F9, 0xCA13, L::H3),
    (0xCA14, 0xCA14, L::H2),
    (0xCA15, 0xCA2F, L::H3),
    (0xCA30, 0xCA30, L::H2),
    (0xCA31, 0xCA4B, L::H3),
    (0xCA4C, 0xCA4C, L::H2),
    (0xCA4D, 0xCA67, L::H3),
    (0xCA68, 0xCA68, L::H2),
    (0xCA69, 0xCA83, L::H3),
    (0xCA84, 0xCA84, L::H2),
    (0xCA85, 0xCA9F, L::H3),
    (0xCAA0, 0xCAA0, L::H2),
    (0xCAA1, 0xCABB, L::H3),
    (0xCABC, 0xCABC, L::H2),
    (0xCABD, 0xCAD7, L::H3),
    (0xCAD8, 0xCAD8, L::H2),
    (0xCAD9, 0xCAF3, L::H3),
    (0xCAF4, 0xCAF4, L::H2),
    (0xCAF5, 0xCB0F, L::H3),
    (0xCB10, 0xCB10, L::H2),
    (0xCB11, 0xCB2B, L::H3),
    (0xCB2C, 0xCB2C, L::H2),
    (0xCB2D, 0xCB47, L::H3),
    (0xCB48, 0xCB48, L::H2),
    (0xCB49, 0xCB63, L::H3),
    (0xCB64, 0xCB64, L::H2),
    (0xCB65, 0xCB7F, L::H3),
    (0xCB80, 0xCB80, L::H2),
    (0xCB81, 0xCB9B, L::H3),
    (0xCB9C, 0xCB9C, L::H2),
    (0xCB9D, 0xCBB7, L::H3),
    (0xCBB8, 0xCBB8, L::H2),
    (0xCBB9, 0xCBD3, L::H3),
    (0xCBD4, 0xCBD4, L::H2),
    (0xCBD5, 0xCBEF, L::H3),
    (0xCBF0, 0xCBF0, L::H2),
    (0xCBF1, 0xCC0B, L::H3),
    (0xCC0C, 0xCC0C, L::H2),
    (0xCC0D, 0xCC27, L::H3),
    (0xCC28, 0xCC28, L::H2),
    (0xCC29, 0xCC43, L::H3),
    (0xCC44, 0xCC44, L::H2),
    (0xCC45, 0xCC5F, L::H3),
    (0xCC60, 0xCC60, L::H2),
    (0xCC61, 0xCC7B, L::H3),
    (0xCC7C, 0xCC7C, L::H2),
    (0xCC7D, 0xCC97, L::H3),
    (0xCC98, 0xCC98, L::H2),
    (0xCC99, 0xCCB3, L::H3),
    (0xCCB4, 0xCCB4, L::H2),
    (0xCCB5, 0xCCCF, L::H3),
    (0xCCD0, 0xCCD0, L::H2),
    (0xCCD1, 0xCCEB, L::H3),
    (0xCCEC, 0xCCEC, L::H2),
    (0xCCED, 0xCD07, L::H3),
    (0xCD08, 0xCD08, L::H2),
    (0xCD09, 0xCD23, L::H3),
    (0xCD24, 0xCD24, L::H2),
    (0xCD25, 0xCD3F, L::H3),
    (0xCD40, 0xCD40, L::H2),
    (0xCD41, 0xCD5B, L::H3),
    (0xCD5C, 0xCD5C, L::H2),
    (0xCD5D, 0xCD77, L::H3),
    (0xCD78, 0xCD78, L::H2),
    (0xCD79, 0xCD93, L::H3),
    (0xCD94, 0xCD94, L::H2),
    (0xCD95, 0xCDAF, L::H3),
    (0xCDB0, 0xCDB0, L::H2),
    (0xCDB1, 0xCDCB, L::H3),
    (0xCDCC, 0xCDCC, L::H2),
    (0xCDCD, 0xCDE7, L::H3),
    (0xCDE8, 0xCDE8, L::H2),
    (0xCDE9, 0xCE03, L::H3),
    (0xCE04, 0xCE04, L::H2),
    (0xCE05, 0xCE1F, L::H3),
    (0xCE20, 0xCE20, L::H2),
    (0xCE21, 0xCE3B, L::H3),
    (0xCE3C, 0xCE3C, L::H2),
    (0xCE3D, 0xCE57, L::H3),
    (0xCE58, 0xCE58, L::H2),
    (0xCE59, 0xCE73, L::H3),
    (0xCE74, 0xCE74, L::H2),
    (0xCE75, 0xCE8F, L::H3),
    (0xCE90, 0xCE90, L::H2),
    (0xCE91, 0xCEAB, L::H3),
    (0xCEAC, 0xCEAC, L::H2),
    (0xCEAD, 0xCEC7, L::H3),
    (0xCEC8, 0xCEC8, L::H2),
    (0xCEC9, 0xCEE3, L::H3),
    (0xCEE4, 0xCEE4, L::H2),
    (0xCEE5, 0xCEFF, L::H3),
    (0xCF00, 0xCF00, L::H2),
    (0xCF01, 0xCF1B, L::H3),
    (0xCF1C, 0xCF1C, L::H2),
    (0xCF1D, 0xCF37, L::H3),
    (0xCF38, 0xCF38, L::H2),
    (0xCF39, 0xCF53, L::H3),
    (0xCF54, 0xCF54, L::H2),
    (0xCF55, 0xCF6F, L::H3),
    (0xCF70, 0xCF70, L::H2),
    (0xCF71, 0xCF8B, L::H3),
    (0xCF8C, 0xCF8C, L::H2),
    (0xCF8D, 0xCFA7, L::H3),
    (0xCFA8, 0xCFA8, L::H2),
    (0xCFA9, 0xCFC3, L::H3),
    (0xCFC4, 0xCFC4, L::H2),
    (0xCFC5, 0xCFDF, L::H3),
    (0xCFE0, 0xCFE0, L::H2),
    (0xCFE1, 0xCFFB, L::H3),
    (0xCFFC, 0xCFFC, L::H2),
    (0xCFFD, 0xD017, L::H3),
    (0xD018, 0xD018, L::H2),
    (0xD019, 0xD033, L::H3),
    (0xD034, 0xD034, L::H2),
    (0xD035, 0xD04F, L::H3),
    (0xD050, 0xD050, L::H2),
    (0xD051, 0xD06B, L::H3),
    (0xD06C, 0xD06C, L::H2),
    (0xD06D, 0xD087, L::H3),
    (0xD088, 0xD088, L::H2),
    (0xD089, 0xD0A3, L::H3),
    (0xD0A4, 0xD0A4, L::H2),
    (0xD0A5, 0xD0BF, L::H3),
    (0xD0C0, 0xD0C0, L::H2),
    (0xD0C1, 0xD0DB, L::H3),
    (0xD0DC, 0xD0DC, L::H2),
    (0xD0DD, 0xD0F7, L::H3),
    (0xD0F8, 0xD0F8, L::H2),
    (0xD0F9, 0xD113, L::H3),
    (0xD114, 0xD114, L::H2),
    (0xD115, 0xD12F, L::H3),
    (0xD130, 0xD130, L::H2),
    (0xD131, 0xD14B, L::H3),
    (0xD14C, 0xD14C, L::H2),
    (0xD14D, 0xD167, L::H3),
    (0xD168, 0xD168, L::H2),
    (0xD169, 0xD183, L::H3),
    (0xD184, 0xD184, L::H2),
    (0xD185, 0xD19F, L::H3),
    (0xD1A0, 0xD1A0, L::H2),
    (0xD1A1, 0xD1BB, L::H3),
    (0xD1BC, 0xD1BC, L::H2),
    (0xD1BD, 0xD1D7, L::H3),
    (0xD1D8, 0xD1D8, L::H2),
    (0xD1D9, 0xD1F3, L::H3),
    (0xD1F4, 0xD1F4, L::H2),
    (0xD1F5, 0xD20F, L::H3),
    (0xD210, 0xD210, L::H2),
    (0xD211, 0xD22B, L::H3),
    (0xD22C, 0xD22C, L::H2),
    (0xD22D, 0xD247, L::H3),
    (0xD248, 0xD248, L::H2),
    (0xD249, 0xD263, L::H3),
    (0xD264, 0xD264, L::H2),
    (0xD265, 0xD27F, L::H3),
    (0xD280, 0xD280, L::H2),
    (0xD281, 0xD29B, L::H3),
    (0xD29C, 0xD29C, L::H2),
    (0xD29D, 0xD2B7, L::H3),
    (0xD2B8, 0xD2B8, L::H2),
    (0xD2B9, 0xD2D3, L::H3),
    (0xD2D4, 0xD2D4, L::H2),
    (0xD2D5, 0xD2EF, L::H3),
    (0xD2F0, 0xD2F0, L::H2),
    (0xD2F1, 0xD30B, L::H3),
    (0xD30C, 0xD30C, L::H2),
    (0xD30D, 0xD327, L::H3),
    (0xD328, 0xD328, L::H2),
    (0xD329, 0xD343, L::H3),
    (0xD344, 0xD344, L::H2),
    (0xD345, 0xD35F, L::H3),
    (0xD360, 0xD360, L::H2),
    (0xD361, 0xD37B, L::H3),
    (0xD37C, 0xD37C, L::H2),
    (0xD37D, 0xD397, L::H3),
    (0xD398, 0xD398, L::H2),
    (0xD399, 0xD3B3, L::H3),
    (0xD3B4, 0xD3B4, L::H2),
    (0xD3B5, 0xD3CF, L::H3),
    (0xD3D0, 0xD3D0, L::H2),
    (0xD3D1, 0xD3EB, L::H3),
    (0xD3EC, 0xD3EC, L::H2),
    (0xD3ED, 0xD407, L::H3),
    (0xD408, 0xD408, L::H2),
    (0xD409, 0xD423, L::H3),
    (0xD424, 0xD424, L::H2),
    (0xD425, 0xD43F, L::H3),
    (0xD440, 0xD440, L::H2),
    (0xD441, 0xD45B, L::H3),
    (0xD45C, 0xD45C, L::H2),
    (0xD45D, 0xD477, L::H3),
    (0xD478, 0xD478, L::H2),
    (0xD479, 0xD493, L::H3),
    (0xD494, 0xD494, L::H2),
    (0xD495, 0xD4AF, L::H3),
    (0xD4B0, 0xD4B0, L::H2),
    (0xD4B1, 0xD4CB, L::H3),
    (0xD4CC, 0xD4CC, L::H2),
    (0xD4CD, 0xD4E7, L::H3),
    (0xD4E8, 0xD4E8, L::H2),
    (0xD4E9, 0xD503, L::H3),
    (0xD504, 0xD504, L::H2),
    (0xD505, 0xD51F, L::H3),
    (0xD520, 0xD520, L::H2),
    (0xD521, 0xD53B, L::H3),
    (0xD53C, 0xD53C, L::H2),
    (0xD53D, 0xD557, L::H3),
    (0xD558, 0xD558, L::H2),
    (0xD559, 0xD573, L::H3),
    (0xD574, 0xD574, L::H2),
    (0xD575, 0xD58F, L::H3),
    (0xD590, 0xD590, L::H2),
    (0xD591, 0xD5AB, L::H3),
    (0xD5AC, 0xD5AC, L::H2),
    (0xD5AD, 0xD5C7, L::H3),
    (0xD5C8, 0xD5C8, L::H2),
    (0xD5C9, 0xD5E3, L::H3),
    (0xD5E4, 0xD5E4, L::H2),
    (0xD5E5, 0xD5FF, L::H3),
    (0xD600, 0xD600, L::H2),
    (0xD601, 0xD61B, L::H3),
    (0xD61C, 0xD61C, L::H2),
    (0xD61D, 0xD637, L::H3),
    (0xD638, 0xD638, L::H2),
    (0xD639, 0xD653, L::H3),
    (0xD654, 0xD654, L::H2),
    (0xD655, 0xD66F, L::H3),
    (0xD670, 0xD670, L::H2),
    (0xD671, 0xD68B, L::H3),
    (0xD68C, 0xD68C, L::H2),
    (0xD68D, 0xD6A7, L::H3),
    (0xD6A8, 0xD6A8, L::H2),
    (0xD6A9, 0xD6C3, L::H3),
    (0xD6C4, 0xD6C4, L::H2),
    (0xD6C5, 0xD6DF, L::H3),
    (0xD6E0, 0xD6E0, L::H2),
    (0xD6E1, 0xD6FB, L::H3),
    (0xD6FC, 0xD6FC, L::H2),
    (0xD6FD, 0xD717, L::H3),
    (0xD718, 0xD718, L::H2),
    (0xD719, 0xD733, L::H3),
    (0xD734, 0xD734, L::H2),
    (0xD735, 0xD74F, L::H3),
    (0xD750, 0xD750, L::H2),
    (0xD751, 0xD76B, L::H3),
    (0xD76C, 0xD76C, L::H2),
    (0xD76D, 0xD787, L::H3),
    (0xD788, 0xD788, L::H2),
    (0xD789, 0xD7A3, L::H3),
    (0xD7B0, 0xD7C6, L::JV),
    (0xD7CB, 0xD7FB, L::JT),
    (0xF900, 0xFAFF, L::ID),
    (0xFB00, 0xFB06, L::AL),
    (0xFB13, 0xFB17, L::AL),
    (0xFB1D, 0xFB1D, L::HL),
    (0xFB1E, 0xFB1E, L::CM),
    (0xFB1F, 0xFB28, L::HL),
    (0xFB29, 0xFB29, L::AL),
    (0xFB2A, 0xFB36, L::HL),
    (0xFB38, 0xFB3C, L::HL),
    (0xFB3E, 0xFB3E, L::HL),
    (0xFB40, 0xFB41, L::HL),
    (0xFB43, 0xFB44, L::HL),
    (0xFB46, 0xFB4F, L::HL),
    (0xFB50, 0xFBC2, L::AL),
    (0xFBD3, 0xFD3D, L::AL),
    (0xFD3E, 0xFD3E, L::CL),
    (0xFD3F, 0xFD3F, L::OP),
    (0xFD40, 0xFD8F, L::AL),
    (0xFD92, 0xFDC7, L::AL),
    (0xFDCF, 0xFDCF, L::AL),
    (0xFDF0, 0xFDFB, L::AL),
    (0xFDFC, 0xFDFC, L::PO),
    (0xFDFD, 0xFDFF, L::AL),
    (0xFE00, 0xFE0F, L::CM),
    (0xFE10, 0xFE10, L::IS),
    (0xFE11, 0xFE12, L::CL),
    (0xFE13, 0xFE14, L::IS),
    (0xFE15, 0xFE16, L::EX),
    (0xFE17, 0xFE17, L::OP),
    (0xFE18, 0xFE18, L::CL),
    (0xFE19, 0xFE19, L::IN),
    (0xFE20, 0xFE2F, L::CM),
    (0xFE30, 0xFE34, L::ID),
    (0xFE35, 0xFE35, L::OP),
    (0xFE36, 0xFE36, L::CL),
    (0xFE37, 0xFE37, L::OP),
    (0xFE38, 0xFE38, L::CL),
    (0xFE39, 0xFE39, L::OP),
    (0xFE3A, 0xFE3A, L::CL),
    (0xFE3B, 0xFE3B, L::OP),
    (0xFE3C, 0xFE3C, L::CL),
    (0xFE3D, 0xFE3D, L::OP),
    (0xFE3E, 0xFE3E, L::CL),
    (0xFE3F, 0xFE3F, L::OP),
    (0xFE40, 0xFE40, L::CL),
    (0xFE41, 0xFE41, L::OP),
    (0xFE42, 0xFE42, L::CL),
    (0xFE43, 0xFE43, L::OP),
    (0xFE44, 0xFE44, L::CL),
    (0xFE45, 0xFE46, L::ID),
    (0xFE47, 0xFE47, L::OP),
    (0xFE48, 0xFE48, L::CL),
    (0xFE49, 0xFE4F, L::ID),
    (0xFE50, 0xFE50, L::CL),
    (0xFE51, 0xFE51, L::ID),
    (0xFE52, 0xFE52, L::CL),
    (0xFE54, 0xFE55, L::NS),
    (0xFE56, 0xFE57, L::EX),
    (0xFE58, 0xFE58, L::ID),
    (0xFE59, 0xFE59, L::OP),
    (0xFE5A, 0xFE5A, L::CL),
    (0xFE5B, 0xFE5B, L::OP),
    (0xFE5C, 0xFE5C, L::CL),
    (0xFE5D, 0xFE5D, L::OP),
    (0xFE5E, 0xFE5E, L::CL),
    (0xFE5F, 0xFE66, L::ID),
    (0xFE68, 0xFE68, L::ID),
    (0xFE69, 0xFE69, L::PR),
    (0xFE6A, 0xFE6A, L::PO),
    (0xFE6B, 0xFE6B, L::ID),
    (0xFE70, 0xFE74, L::AL),
    (0xFE76, 0xFEFC, L::AL),
    (0xFEFF, 0xFEFF, L::WJ),
    (0xFF01, 0xFF01, L::EX),
    (0xFF02, 0xFF03, L::ID),
    (0xFF04, 0xFF04, L::PR),
    (0xFF05, 0xFF05, L::PO),
    (0xFF06, 0xFF07, L::ID),
    (0xFF08, 0xFF08, L::OP),
    (0xFF09, 0xFF09, L::CL),
    (0xFF0A, 0xFF0B, L::ID),
    (0xFF0C, 0xFF0C, L::CL),
    (0xFF0D, 0xFF0D, L::ID),
    (0xFF0E, 0xFF0E, L::CL),
    (0xFF0F, 0xFF19, L::ID),
    (0xFF1A, 0xFF1B, L::NS),
    (0xFF1C, 0xFF1E, L::ID),
    (0xFF1F, 0xFF1F, L::EX),
    (0xFF20, 0xFF3A, L::ID),
    (0xFF3B, 0xFF3B, L::OP),
    (0xFF3C, 0xFF3C, L::ID),
    (0xFF3D, 0xFF3D, L::CL),
    (0xFF3E, 0xFF5A, L::ID),
    (0xFF5B, 0xFF5B, L::OP),
    (0xFF5C, 0xFF5C, L::ID),
    (0xFF5D, 0xFF5D, L::CL),
    (0xFF5E, 0xFF5E, L::ID),
    (0xFF5F, 0xFF5F, L::OP),
    (0xFF60, 0xFF61, L::CL),
    (0xFF62, 0xFF62, L::OP),
    (0xFF63, 0xFF64, L::CL),
    (0xFF65, 0xFF65, L::NS),
    (0xFF66, 0xFF66, L::ID),
    (0xFF67, 0xFF70, L::CJ),
    (0xFF71, 0xFF9D, L::ID),
    (0xFF9E, 0xFF9F, L::NS),
    (0xFFA0, 0xFFBE, L::ID),
    (0xFFC2, 0xFFC7, L::ID),
    (0xFFCA, 0xFFCF, L::ID),
    (0xFFD2, 0xFFD7, L::ID),
    (0xFFDA, 0xFFDC, L::ID),
    (0xFFE0, 0xFFE0, L::PO),
    (0xFFE1, 0xFFE1, L::PR),
    (0xFFE2, 0xFFE4, L::ID),
    (0xFFE5, 0xFFE6, L::PR),
    (0xFFE8, 0xFFEE, L::AL),
    (0xFFF9, 0xFFFB, L::CM),
    (0xFFFC, 0xFFFC, L::CB),
    (0xFFFD, 0xFFFD, L::AI),
    (0x10000, 0x1000B, L::AL),
    (0x1000D, 0x10026, L::AL),
    (0x10028, 0x1003A, L::AL),
    (0x1003C, 0x1003D, L::AL),
    (0x1003F, 0x1004D, L::AL),
    (0x10050, 0x1005D, L::AL),
    (0x10080, 0x100FA, L::AL),
    (0x10100, 0x10102, L::BA),
    (0x10107, 0x10133, L::AL),
    (0x10137, 0x1018E, L::AL),
    (0x10190, 0x1019C, L::AL),
    (0x101A0, 0x101A0, L::AL),
    (0x101D0, 0x101FC, L::AL),
    (0x101FD, 0x101FD, L::CM),
    (0x10280, 0x1029C, L::AL),
    (0x102A0, 0x102D0, L::AL),
    (0x102E0, 0x102E0, L::CM),
    (0x102E1, 0x102FB, L::AL),
    (0x10300, 0x10323, L::AL),
    (0x1032D, 0x1034A, L::AL),
    (0x10350, 0x10375, L::AL),
    (0x10376, 0x1037A, L::CM),
    (0x10380, 0x1039D, L::AL),
    (0x1039F, 0x1039F, L::BA),
    (0x103A0, 0x103C3, L::AL),
    (0x103C8, 0x103CF, L::AL),
    (0x103D0, 0x103D0, L::BA),
    (0x103D1, 0x103D5, L::AL),
    (0x10400, 0x1049D, L::AL),
    (0x104A0, 0x104A9, L::NU),
    (0x104B0, 0x104D3, L::AL),
    (0x104D8, 0x104FB, L::AL),
    (0x10500, 0x10527, L::AL),
    (0x10530, 0x10563, L::AL),
    (0x1056F, 0x1057A, L::AL),
    (0x1057C, 0x1058A, L::AL),
    (0x1058C, 0x10592, L::AL),
    (0x10594, 0x10595, L::AL),
    (0x10597, 0x105A1, L::AL),
    (0x105A3, 0x105B1, L::AL),
    (0x105B3, 0x105B9, L::AL),
    (0x105BB, 0x105BC, L::AL),
    (0x10600, 0x10736, L::AL),
    (0x10740, 0x10755, L::AL),
    (0x10760, 0x10767, L::AL),
    (0x10780, 0x10785, L::AL),
    (0x10787, 0x107B0, L::AL),
    (0x107B2, 0x107BA, L::AL),
    (0x10800, 0x10805, L::AL),
    (0x10808, 0x10808, L::AL),
    (0x1080A, 0x10835, L::AL),
    (0x10837, 0x10838, L::AL),
    (0x1083C, 0x1083C, L::AL),
    (0x1083F, 0x10855, L::AL),
    (0x10857, 0x10857, L::BA),
    (0x10858, 0x1089E, L::AL),
    (0x108A7, 0x108AF, L::AL),
    (0x108E0, 0x108F2, L::AL),
    (0x108F4, 0x108F5, L::AL),
    (0x108FB, 0x1091B, L::AL),
    (0x1091F, 0x1091F, L::BA),
    (0x10920, 0x10939, L::AL),
    (0x1093F, 0x1093F, L::AL),
    (0x10980, 0x109B7, L::AL),
    (0x109BC, 0x109CF, L::AL),
    (0x109D2, 0x10A00, L::AL),
    (0x10A01, 0x10A03, L::CM),
    (0x10A05, 0x10A06, L::CM),
    (0x10A0C, 0x10A0F, L::CM),
    (0x10A10, 0x10A13, L::AL),
    (0x10A15, 0x10A17, L::AL),
    (0x10A19, 0x10A35, L::AL),
    (0x10A38, 0x10A3A, L::CM),
    (0x10A3F, 0x10A3F, L::CM),
    (0x10A40, 0x10A48, L::AL),
    (0x10A50, 0x10A57, L::BA),
    (0x10A58, 0x10A58, L::AL),
    (0x10A60, 0x10A9F, L::AL),
    (0x10AC0, 0x10AE4, L::AL),
    (0x10AE5, 0x10AE6, L::CM),
    (0x10AEB, 0x10AEF, L::AL),
    (0x10AF0, 0x10AF5, L::BA),
    (0x10AF6, 0x10AF6, L::IN),
    (0x10B00, 0x10B35, L::AL),
    (0x10B39, 0x10B3F, L::BA),
    (0x10B40, 0x10B55, L::AL),
    (0x10B58, 0x10B72, L::AL),
    (0x10B78, 0x10B91, L::AL),
    (0x10B99, 0x10B9C, L::AL),
    (0x10BA9, 0x10BAF, L::AL),
    (0x10C00, 0x10C48, L::AL),
    (0x10C80, 0x10CB2, L::AL),
    (0x10CC0, 0x10CF2, L::AL),
    (0x10CFA, 0x10D23, L::AL),
    (0x10D24, 0x10D27, L::CM),
    (0x10D30, 0x10D39, L::NU),
    (0x10E60, 0x10E7E, L::AL),
    (0x10E80, 0x10EA9, L::AL),
    (0x10EAB, 0x10EAC, L::CM),
    (0x10EAD, 0x10EAD, L::BA),
    (0x10EB0, 0x10EB1, L::AL),
    (0x10F00, 0x10F27, L::AL),
    (0x10F30, 0x10F45, L::AL),
    (0x10F46, 0x10F50, L::CM),
    (0x10F51, 0x10F59, L::AL),
    (0x10F70, 0x10F81, L::AL),
    (0x10F82, 0x10F85, L::CM),
    (0x10F86, 0x10F89, L::AL),
    (0x10FB0, 0x10FCB, L::AL),
    (0x10FE0, 0x10FF6, L::AL),
    (0x11000, 0x11002, L::CM),
    (0x11003, 0x11037, L::AL),
    (0x11038, 0x11046, L::CM),
    (0x11047, 0x11048, L::BA),
    (0x11049, 0x1104D, L::AL),
    (0x11052, 0x11065, L::AL),
    (0x11066, 0x1106F, L::NU),
    (0x11070, 0x11070, L::CM),
    (0x11071, 0x11072, L::AL),
    (0x11073, 0x11074, L::CM),
    (0x11075, 0x11075, L::AL),
    (0x1107F, 0x11082, L::CM),
    (0x11083, 0x110AF, L::AL),
    (0x110B0, 0x110BA, L::CM),
    (0x110BB, 0x110BD, L::AL),
    (0x110BE, 0x110C1, L::BA),
    (0x110C2, 0x110C2, L::CM),
    (0x110CD, 0x110CD, L::AL),
    (0x110D0, 0x110E8, L::AL),
    (0x110F0, 0x110F9, L::NU),
    (0x11100, 0x11102, L::CM),
    (0x11103, 0x11126, L::AL),
    (0x11127, 0x11134, L::CM),
    (0x11136, 0x1113F, L::NU),
    (0x11140, 0x11143, L::BA),
    (0x11144, 0x11144, L::AL),
    (0x11145, 0x11146, L::CM),
    (0x11147, 0x11147, L::AL),
    (0x11150, 0x11172, L::AL),
    (0x11173, 0x11173, L::CM),
    (0x11174, 0x11174, L::AL),
    (0x11175, 0x11175, L::BB),
    (0x11176, 0x11176, L::AL),
    (0x11180, 0x11182, L::CM),
    (0x11183, 0x111B2, L::AL),
    (0x111B3, 0x111C0, L::CM),
    (0x111C1, 0x111C4, L::AL),
    (0x111C5, 0x111C6, L::BA),
    (0x111C7, 0x111C7, L::AL),
    (0x111C8, 0x111C8, L::BA),
    (0x111C9, 0x111CC, L::CM),
    (0x111CD, 0x111CD, L::AL),
    (0x111CE, 0x111CF, L::CM),
    (0x111D0, 0x111D9, L::NU),
    (0x111DA, 0x111DA, L::AL),
    (0x111DB, 0x111DB, L::BB),
    (0x111DC, 0x111DC, L::AL),
    (0x111DD, 0x111DF, L::BA),
    (0x111E1, 0x111F4, L::AL),
    (0x11200, 0x11211, L::AL),
    (0x11213, 0x1122B, L::AL),
    (0x1122C, 0x11237, L::CM),
    (0x11238, 0x11239, L::BA),
    (0x1123A, 0x1123A, L::AL),
    (0x1123B, 0x1123C, L::BA),
    (0x1123D, 0x1123D, L::AL),
    (0x1123E, 0x1123E, L::CM),
    (0x11280, 0x11286, L::AL),
    (0x11288, 0x11288, L::AL),
    (0x1128A, 0x1128D, L::AL),
    (0x1128F, 0x1129D, L::AL),
    (0x1129F, 0x112A8, L::AL),
    (0x112A9, 0x112A9, L::BA),
    (0x112B0, 0x112DE, L::AL),
    (0x112DF, 0x112EA, L::CM),
    (0x112F0, 0x112F9, L::NU),
    (0x11300, 0x11303, L::CM),
    (0x11305, 0x1130C, L::AL),
    (0x1130F, 0x11310, L::AL),
    (0x11313, 0x11328, L::AL),
    (0x1132A, 0x11330, L::AL),
    (0x11332, 0x11333, L::AL),
    (0x11335, 0x11339, L::AL),
    (0x1133B, 0x1133C, L::CM),
    (0x1133D, 0x1133D, L::AL),
    (0x1133E, 0x11344, L::CM),
    (0x11347, 0x11348, L::CM),
    (0x1134B, 0x1134D, L::CM),
    (0x11350, 0x11350, L::AL),
    (0x11357, 0x11357, L::CM),
    (0x1135D, 0x11361, L::AL),
    (0x11362, 0x11363, L::CM),
    (0x11366, 0x1136C, L::CM),
    (0x11370, 0x11374, L::CM),
    (0x11400, 0x11434, L::AL),
    (0x11435, 0x11446, L::CM),
    (0x11447, 0x1144A, L::AL),
    (0x1144B, 0x1144E, L::BA),
    (0x1144F, 0x1144F, L::AL),
    (0x11450, 0x11459, L::NU),
    (0x1145A, 0x1145B, L::BA),
    (0x1145D, 0x1145D, L::AL),
    (0x1145E, 0x1145E, L::CM),
    (0x1145F, 0x11461, L::AL),
    (0x11480, 0x114AF, L::AL),
    (0x114B0, 0x114C3, L::CM),
    (0x114C4, 0x114C7, L::AL),
    (0x114D0, 0x114D9, L::NU),
    (0x11580, 0x115AE, L::AL),
    (0x115AF, 0x115B5, L::CM),
    (0x115B8, 0x115C0, L::CM),
    (0x115C1, 0x115C1, L::BB),
    (0x115C2, 0x115C3, L::BA),
    (0x115C4, 0x115C5, L::EX),
    (0x115C6, 0x115C8, L::AL),
    (0x115C9, 0x115D7, L::BA),
    (0x115D8, 0x115DB, L::AL),
    (0x115DC, 0x115DD, L::CM),
    (0x11600, 0x1162F, L::AL),
    (0x11630, 0x11640, L::CM),
    (0x11641, 0x11642, L::BA),
    (0x11643, 0x11644, L::AL),
    (0x11650, 0x11659, L::NU),
    (0x11660, 0x1166C, L::BB),
    (0x11680, 0x116AA, L::AL),
    (0x116AB, 0x116B7, L::CM),
    (0x116B8, 0x116B9, L::AL),
    (0x116C0, 0x116C9, L::NU),
    (0x11700, 0x1171A, L::SA),
    (0x1171D, 0x1172B, L::SA),
    (0x11730, 0x11739, L::NU),
    (0x1173A, 0x1173B, L::SA),
    (0x1173C, 0x1173E, L::BA),
    (0x1173F, 0x11746, L::SA),
    (0x11800, 0x1182B, L::AL),
    (0x1182C, 0x1183A, L::CM),
    (0x1183B, 0x1183B, L::AL),
    (0x118A0, 0x118DF, L::AL),
    (0x118E0, 0x118E9, L::NU),
    (0x118EA, 0x118F2, L::AL),
    (0x118FF, 0x11906, L::AL),
    (0x11909, 0x11909, L::AL),
    (0x1190C, 0x11913, L::AL),
    (0x11915, 0x11916, L::AL),
    (0x11918, 0x1192F, L::AL),
    (0x11930, 0x11935, L::CM),
    (0x11937, 0x11938, L::CM),
    (0x1193B, 0x1193E, L::CM),
    (0x1193F, 0x1193F, L::AL),
    (0x11940, 0x11940, L::CM),
    (0x11941, 0x11941, L::AL),
    (0x11942, 0x11943, L::CM),
    (0x11944, 0x11946, L::BA),
    (0x11950, 0x11959, L::NU),
    (0x119A0, 0x119A7, L::AL),
    (0x119AA, 0x119D0, L::AL),
    (0x119D1, 0x119D7, L::CM),
    (0x119DA, 0x119E0, L::CM),
    (0x119E1, 0x119E1, L::AL),
    (0x119E2, 0x119E2, L::BB),
    (0x119E3, 0x119E3, L::AL),
    (0x119E4, 0x119E4, L::CM),
    (0x11A00, 0x11A00, L::AL),
    (0x11A01, 0x11A0A, L::CM),
    (0x11A0B, 0x11A32, L::AL),
    (0x11A33, 0x11A39, L::CM),
    (0x11A3A, 0x11A3A, L::AL),
    (0x11A3B, 0x11A3E, L::CM),
    (0x11A3F, 0x11A3F, L::BB),
    (0x11A40, 0x11A40, L::AL),
    (0x11A41, 0x11A44, L::BA),
    (0x11A45, 0x11A45, L::BB),
    (0x11A46, 0x11A46, L::AL),
    (0x11A47, 0x11A47, L::CM),
    (0x11A50, 0x11A50, L::AL),
    (0x11A51, 0x11A5B, L::CM),
    (0x11A5C, 0x11A89, L::AL),
    (0x11A8A, 0x11A99, L::CM),
    (0x11A9A, 0x11A9C, L::BA),
    (0x11A9D, 0x11A9D, L::AL),
    (0x11A9E, 0x11AA0, L::BB),
    (0x11AA1, 0x11AA2, L::BA),
    (0x11AB0, 0x11AF8, L::AL),
    (0x11C00, 0x11C08, L::AL),
    (0x11C0A, 0x11C2E, L::AL),
    (0x11C2F, 0x11C36, L::CM),
    (0x11C38, 0x11C3F, L::CM),
    (0x11C40, 0x11C40, L::AL),
    (0x11C41, 0x11C45, L::BA),
    (0x11C50, 0x11C59, L::NU),
    (0x11C5A, 0x11C6C, L::AL),
    (0x11C70, 0x11C70, L::BB),
    (0x11C71, 0x11C71, L::EX),
    (0x11C72, 0x11C8F, L::AL),
    (0x11C92, 0x11CA7, L::CM),
    (0x11CA9, 0x11CB6, L::CM),
    (0x11D00, 0x11D06, L::AL),
    (0x11D08, 0x11D09, L::AL),
    (0x11D0B, 0x11D30, L::AL),
    (0x11D31, 0x11D36, L::CM),
    (0x11D3A, 0x11D3A, L::CM),
    (0x11D3C, 0x11D3D, L::CM),
    (0x11D3F, 0x11D45, L::CM),
    (0x11D46, 0x11D46, L::AL),
    (0x11D47, 0x11D47, L::CM),
    (0x11D50, 0x11D59, L::NU),
    (0x11D60, 0x11D65, L::AL),
    (0x11D67, 0x11D68, L::AL),
    (0x11D6A, 0x11D89, L::AL),
    (0x11D8A, 0x11D8E, L::CM),
    (0x11D90, 0x11D91, L::CM),
    (0x11D93, 0x11D97, L::CM),
    (0x11D98, 0x11D98, L::AL),
    (0x11DA0, 0x11DA9, L::NU),
    (0x11EE0, 0x11EF2, L::AL),
    (0x11EF3, 0x11EF6, L::CM),
    (0x11EF7, 0x11EF8, L::AL),
    (0x11FB0, 0x11FB0, L::AL),
    (0x11FC0, 0x11FDC, L::AL),
    (0x11FDD, 0x11FE0, L::PO),
    (0x11FE1, 0x11FF1, L::AL),
    (0x11FFF, 0x11FFF, L::BA),
    (0x12000, 0x12399, L::AL),
    (0x12400, 0x1246E, L::AL),
    (0x12470, 0x12474, L::BA),
    (0x12480, 0x12543, L::AL),
    (0x12F90, 0x12FF2, L::AL),
    (0x13000, 0x13257, L::AL),
    (0x13258, 0x1325A, L::OP),
    (0x1325B, 0x1325D, L::CL),
    (0x1325E, 0x13281, L::AL),
    (0x13282, 0x13282, L::CL),
    (0x13283, 0x13285, L::AL),
    (0x13286, 0x13286, L::OP),
    (0x13287, 0x13287, L::CL),
    (0x13288, 0x13288, L::OP),
    (0x13289, 0x13289, L::CL),
    (0x1328A, 0x13378, L::AL),
    (0x13379, 0x13379, L::OP),
    (0x1337A, 0x1337B, L::CL),
    (0x1337C, 0x1342E, L::AL),
    (0x13430, 0x13436, L::GL),
    (0x13437, 0x13437, L::OP),
    (0x13438, 0x13438, L::CL),
    (0x14400, 0x145CD, L::AL),
    (0x145CE, 0x145CE, L::OP),
    (0x145CF, 0x145CF, L::CL),
    (0x145D0, 0x14646, L::AL),
    (0x16800, 0x16A38, L::AL),
    (0x16A40, 0x16A5E, L::AL),
    (0x16A60, 0x16A69, L::NU),
    (0x16A6E, 0x16A6F, L::BA),
    (0x16A70, 0x16ABE, L::AL),
    (0x16AC0, 0x16AC9, L::NU),
    (0x16AD0, 0x16AED, L::AL),
    (0x16AF0, 0x16AF4, L::CM),
    (0x16AF5, 0x16AF5, L::BA),
    (0x16B00, 0x16B2F, L::AL),
    (0x16B30, 0x16B36, L::CM),
    (0x16B37, 0x16B39, L::BA),
    (0x16B3A, 0x16B43, L::AL),
    (0x16B44, 0x16B44, L::BA),
    (0x16B45, 0x16B45, L::AL),
    (0x16B50, 0x16B59, L::NU),
    (0x16B5B, 0x16B61, L::AL),
    (0x16B63, 0x16B77, L::AL),
    (0x16B7D, 0x16B8F, L::AL),
    (0x16E40, 0x16E96, L::AL),
    (0x16E97, 0x16E98, L::BA),
    (0x16E99, 0x16E9A, L::AL),
    (0x16F00, 0x16F4A, L::AL),
    (0x16F4F, 0x16F4F, L::CM),
    (0x16F50, 0x16F50, L::AL),
    (0x16F51, 0x16F87, L::CM),
    (0x16F8F, 0x16F92, L::CM),
    (0x16F93, 0x16F9F, L::AL),
    (0x16FE0, 0x16FE3, L::NS),
    (0x16FE4, 0x16FE4, L::GL),
    (0x16FF0, 0x16FF1, L::CM),
    (0x17000, 0x187F7, L::ID),
    (0x18800, 0x18AFF, L::ID),
    (0x18B00, 0x18CD5, L::AL),
    (0x18D00, 0x18D08, L::ID),
    (0x1AFF0, 0x1AFF3, L::AL),
    (0x1AFF5, 0x1AFFB, L::AL),
    (0x1AFFD, 0x1AFFE, L::AL),
    (0x1B000, 0x1B122, L::ID),
    (0x1B150, 0x1B152, L::CJ),
    (0x1B164, 0x1B167, L::CJ),
    (0x1B170, 0x1B2FB, L::ID),
    (0x1BC00, 0x1BC6A, L::AL),
    (0x1BC70, 0x1BC7C, L::AL),
    (0x1BC80, 0x1BC88, L::AL),
    (0x1BC90, 0x1BC99, L::AL),
    (0x1BC9C, 0x1BC9C, L::AL),
    (0x1BC9D, 0x1BC9E, L::CM),
    (0x1BC9F, 0x1BC9F, L::BA),
    (0x1BCA0, 0x1BCA3, L::CM),
    (0x1CF00, 0x1CF2D, L::CM),
    (0x1CF30, 0x1CF46, L::CM),
    (0x1CF50, 0x1CFC3, L::AL),
    (0x1D000, 0x1D0F5, L::AL),
    (0x1D100, 0x1D126, L::AL),
    (0x1D129, 0x1D164, L::AL),
    (0x1D165, 0x1D169, L::CM),
    (0x1D16A, 0x1D16C, L::AL),
    (0x1D16D, 0x1D182, L::CM),
    (0x1D183, 0x1D184, L::AL),
    (0x1D185, 0x1D18B, L::CM),
    (0x1D18C, 0x1D1A9, L::AL),
    (0x1D1AA, 0x1D1AD, L::CM),
    (0x1D1AE, 0x1D1EA, L::AL),
    (0x1D200, 0x1D241, L::AL),
    (0x1D242, 0x1D244, L::CM),
    (0x1D245, 0x1D245, L::AL),
    (0x1D2E0, 0x1D2F3, L::AL),
    (0x1D300, 0x1D356, L::AL),
    (0x1D360, 0x1D378, L::AL),
    (0x1D400, 0x1D454, L::AL),
    (0x1D456, 0x1D49C, L::AL),
    (0x1D49E, 0x1D49F, L::AL),
    (0x1D4A2, 0x1D4A2, L::AL),
    (0x1D4A5, 0x1D4A6, L::AL),
    (0x1D4A9, 0x1D4AC, L::AL),
    (0x1D4AE, 0x1D4B9, L::AL),
    (0x1D4BB, 0x1D4BB, L::AL),
    (0x1D4BD, 0x1D4C3, L::AL),
    (0x1D4C5, 0x1D505, L::AL),
    (0x1D507, 0x1D50A, L::AL),
    (0x1D50D, 0x1D514, L::AL),
    (0x1D516, 0x1D51C, L::AL),
    (0x1D51E, 0x1D539, L::AL),
    (0x1D53B, 0x1D53E, L::AL),
    (0x1D540, 0x1D544, L::AL),
    (0x1D546, 0x1D546, L::AL),
    (0x1D54A, 0x1D550, L::AL),
    (0x1D552, 0x1D6A5, L::AL),
    (0x1D6A8, 0x1D7CB, L::AL),
    (0x1D7CE, 0x1D7FF, L::NU),
    (0x1D800, 0x1D9FF, L::AL),
    (0x1DA00, 0x1DA36, L::CM),
    (0x1DA37, 0x1DA3A, L::AL),
    (0x1DA3B, 0x1DA6C, L::CM),
    (0x1DA6D, 0x1DA74, L::AL),
    (0x1DA75, 0x1DA75, L::CM),
    (0x1DA76, 0x1DA83, L::AL),
    (0x1DA84, 0x1DA84, L::CM),
    (0x1DA85, 0x1DA86, L::AL),
    (0x1DA87, 0x1DA8A, L::BA),
    (0x1DA8B, 0x1DA8B, L::AL),
    (0x1DA9B, 0x1DA9F, L::CM),
    (0x1DAA1, 0x1DAAF, L::CM),
    (0x1DF00, 0x1DF1E, L::AL),
    (0x1E000, 0x1E006, L::CM),
    (0x1E008, 0x1E018, L::CM),
    (0x1E01B, 0x1E021, L::CM),
    (0x1E023, 0x1E024, L::CM),
    (0x1E026, 0x1E02A, L::CM),
    (0x1E100, 0x1E12C, L::AL),
    (0x1E130, 0x1E136, L::CM),
    (0x1E137, 0x1E13D, L::AL),
    (0x1E140, 0x1E149, L::NU),
    (0x1E14E, 0x1E14F, L::AL),
    (0x1E290, 0x1E2AD, L::AL),
    (0x1E2AE, 0x1E2AE, L::CM),
    (0x1E2C0, 0x1E2EB, L::AL),
    (0x1E2EC, 0x1E2EF, L::CM),
    (0x1E2F0, 0x1E2F9, L::NU),
    (0x1E2FF, 0x1E2FF, L::PR),
    (0x1E7E0, 0x1E7E6, L::AL),
    (0x1E7E8, 0x1E7EB, L::AL),
    (0x1E7ED, 0x1E7EE, L::AL),
    (0x1E7F0, 0x1E7FE, L::AL),
    (0x1E800, 0x1E8C4, L::AL),
    (0x1E8C7, 0x1E8CF, L::AL),
    (0x1E8D0, 0x1E8D6, L::CM),
    (0x1E900, 0x1E943, L::AL),
    (0x1E944, 0x1E94A, L::CM),
    (0x1E94B, 0x1E94B, L::AL),
    (0x1E950, 0x1E959, L::NU),
    (0x1E95E, 0x1E95F, L::OP),
    (0x1EC71, 0x1ECAB, L::AL),
    (0x1ECAC, 0x1ECAC, L::PO),
    (0x1ECAD, 0x1ECAF, L::AL),
    (0x1ECB0, 0x1ECB0, L::PO),
    (0x1ECB1, 0x1ECB4, L::AL),
    (0x1ED01, 0x1ED3D, L::AL),
    (0x1EE00, 0x1EE03, L::AL),
    (0x1EE05, 0x1EE1F, L::AL),
    (0x1EE21, 0x1EE22, L::AL),
    (0x1EE24, 0x1EE24, L::AL),
    (0x1EE27, 0x1EE27, L::AL),
    (0x1EE29, 0x1EE32, L::AL),
    (0x1EE34, 0x1EE37, L::AL),
    (0x1EE39, 0x1EE39, L::AL),
    (0x1EE3B, 0x1EE3B, L::AL),
    (0x1EE42, 0x1EE42, L::AL),
    (0x1EE47, 0x1EE47, L::AL),
    (0x1EE49, 0x1EE49, L::AL),
    (0x1EE4B, 0x1EE4B, L::AL),
    (0x1EE4D, 0x1EE4F, L::AL),
    (0x1EE51, 0x1EE52, L::AL),
    (0x1EE54, 0x1EE54, L::AL),
    (0x1EE57, 0x1EE57, L::AL),
    (0x1EE59, 0x1EE59, L::AL),
    (0x1EE5B, 0x1EE5B, L::AL),
    (0x1EE5D, 0x1EE5D, L::AL),
    (0x1EE5F, 0x1EE5F, L::AL),
    (0x1EE61, 0x1EE62, L::AL),
    (0x1EE64, 0x1EE64, L::AL),
    (0x1EE67, 0x1EE6A, L::AL),
    (0x1EE6C, 0x1EE72, L::AL),
    (0x1EE74, 0x1EE77, L::AL),
    (0x1EE79, 0x1EE7C, L::AL),
    (0x1EE7E, 0x1EE7E, L::AL),
    (0x1EE80, 0x1EE89, L::AL),
    (0x1EE8B, 0x1EE9B, L::AL),
    (0x1EEA1, 0x1EEA3, L::AL),
    (0x1EEA5, 0x1EEA9, L::AL),
    (0x1EEAB, 0x1EEBB, L::AL),
    (0x1EEF0, 0x1EEF1, L::AL),
    (0x1F000, 0x1F0FF, L::ID),
    (0x1F100, 0x1F10C, L::AI),
    (0x1F10D, 0x1F10F, L::ID),
    (0x1F110, 0x1F12D, L::AI),
    (0x1F12E, 0x1F12F, L::AL),
    (0x1F130, 0x1F169, L::AI),
    (0x1F16A, 0x1F16C, L::AL),
    (0x1F16D, 0x1F16F, L::ID),
    (0x1F170, 0x1F1AC, L::AI),
    (0x1F1AD, 0x1F1E5, L::ID),
    (0x1F1E6, 0x1F1FF, L::RI),
    (0x1F200, 0x1F384, L::ID),
    (0x1F385, 0x1F385, L::EB),
    (0x1F386, 0x1F39B, L::ID),
    (0x1F39C, 0x1F39D, L::AL),
    (0x1F39E, 0x1F3B4, L::ID),
    (0x1F3B5, 0x1F3B6, L::AL),
    (0x1F3B7, 0x1F3BB, L::ID),
    (0x1F3BC, 0x1F3BC, L::AL),
    (0x1F3BD, 0x1F3C1, L::ID),
    (0x1F3C2, 0x1F3C4, L::EB),
    (0x1F3C5, 0x1F3C6, L::ID),
    (0x1F3C7, 0x1F3C7, L::EB),
    (0x1F3C8, 0x1F3C9, L::ID),
    (0x1F3CA, 0x1F3CC, L::EB),
    (0x1F3CD, 0x1F3FA, L::ID),
    (0x1F3FB, 0x1F3FF, L::EM),
    (0x1F400, 0x1F441, L::ID),
    (0x1F442, 0x1F443, L::EB),
    (0x1F444, 0x1F445, L::ID),
    (0x1F446, 0x1F450, L::EB),
    (0x1F451, 0x1F465, L::ID),
    (0x1F466, 0x1F478, L::EB),
    (0x1F479, 0x1F47B, L::ID),
    (0x1F47C, 0x1F47C, L::EB),
    (0x1F47D, 0x1F480, L::ID),
    (0x1F481, 0x1F483, L::EB),
    (0x1F484, 0x1F484, L::ID),
    (0x1F485, 0x1F487, L::EB),
    (0x1F488, 0x1F48E, L::ID),
    (0x1F48F, 0x1F48F, L::EB),
    (0x1F490, 0x1F490, L::ID),
    (0x1F491, 0x1F491, L::EB),
    (0x1F492, 0x1F49F, L::ID),
    (0x1F4A0, 0x1F4A0, L::AL),
    (0x1F4A1, 0x1F4A1, L::ID),
    (0x1F4A2, 0x1F4A2, L::AL),
    (0x1F4A3, 0x1F4A3, L::ID),
    (0x1F4A4, 0x1F4A4, L::AL),
    (0x1F4A5, 0x1F4A9, L::ID),
    (0x1F4AA, 0x1F4AA, L::EB),
    (0x1F4AB, 0x1F4AE, L::ID),
    (0x1F4AF, 0x1F4AF, L::AL),
    (0x1F4B0, 0x1F4B0, L::ID),
    (0x1F4B1, 0x1F4B2, L::AL),
    (0x1F4B3, 0x1F4FF, L::ID),
    (0x1F500, 0x1F506, L::AL),
    (0x1F507, 0x1F516, L::ID),
    (0x1F517, 0x1F524, L::AL),
    (0x1F525, 0x1F531, L::ID),
    (0x1F532, 0x1F549, L::AL),
    (0x1F54A, 0x1F573, L::ID),
    (0x1F574, 0x1F575, L::EB),
    (0x1F576, 0x1F579, L::ID),
    (0x1F57A, 0x1F57A, L::EB),
    (0x1F57B, 0x1F58F, L::ID),
    (0x1F590, 0x1F590, L::EB),
    (0x1F591, 0x1F594, L::ID),
    (0x1F595, 0x1F596, L::EB),
    (0x1F597, 0x1F5D3, L::ID),
    (0x1F5D4, 0x1F5DB, L::AL),
    (0x1F5DC, 0x1F5F3, L::ID),
    (0x1F5F4, 0x1F5F9, L::AL),
    (0x1F5FA, 0x1F644, L::ID),
    (0x1F645, 0x1F647, L::EB),
    (0x1F648, 0x1F64A, L::ID),
    (0x1F64B, 0x1F64F, L::EB),
    (0x1F650, 0x1F675, L::AL),
    (0x1F676, 0x1F678, L::QU),
    (0x1F679, 0x1F67B, L::NS),
    (0x1F67C, 0x1F67F, L::AL),
    (0x1F680, 0x1F6A2, L::ID),
    (0x1F6A3, 0x1F6A3, L::EB),
    (0x1F6A4, 0x1F6B3, L::ID),
    (0x1F6B4, 0x1F6B6, L::EB),
    (0x1F6B7, 0x1F6BF, L::ID),
    (0x1F6C0, 0x1F6C0, L::EB),
    (0x1F6C1, 0x1F6CB, L::ID),
    (0x1F6CC, 0x1F6CC, L::EB),
    (0x1F6CD, 0x1F6FF, L::ID),
    (0x1F700, 0x1F773, L::AL),
    (0x1F774, 0x1F77F, L::ID),
    (0x1F780, 0x1F7D4, L::AL),
    (0x1F7D5, 0x1F7FF, L::ID),
    (0x1F800, 0x1F80B, L::AL),
    (0x1F80C, 0x1F80F, L::ID),
    (0x1F810, 0x1F847, L::AL),
    (0x1F848, 0x1F84F, L::ID),
    (0x1F850, 0x1F859, L::AL),
    (0x1F85A, 0x1F85F, L::ID),
    (0x1F860, 0x1F887, L::AL),
    (0x1F888, 0x1F88F, L::ID),
    (0x1F890, 0x1F8AD, L::AL),
    (0x1F8AE, 0x1F8FF, L::ID),
    (0x1F900, 0x1F90B, L::AL),
    (0x1F90C, 0x1F90C, L::EB),
    (0x1F90D, 0x1F90E, L::ID),
    (0x1F90F, 0x1F90F, L::EB),
    (0x1F910, 0x1F917, L::ID),
    (0x1F918, 0x1F91F, L::EB),
    (0x1F920, 0x1F925, L::ID),
    (0x1F926, 0x1F926, L::EB),
    (0x1F927, 0x1F92F, L::ID),
    (0x1F930, 0x1F939, L::EB),
    (0x1F93A, 0x1F93B, L::ID),
    (0x1F93C, 0x1F93E, L::EB),
    (0x1F93F, 0x1F976, L::ID),
    (0x1F977, 0x1F977, L::EB),
    (0x1F978, 0x1F9B4, L::ID),
    (0x1F9B5, 0x1F9B6, L::EB),
    (0x1F9B7, 0x1F9B7, L::ID),
    (0x1F9B8, 0x1F9B9, L::EB),
    (0x1F9BA, 0x1F9BA, L::ID),
    (0x1F9BB, 0x1F9BB, L::EB),
    (0x1F9BC, 0x1F9CC, L::ID),
    (0x1F9CD, 0x1F9CF, L::EB),
    (0x1F9D0, 0x1F9D0, L::ID),
    (0x1F9D1, 0x1F9DD, L::EB),
    (0x1F9DE, 0x1F9FF, L::ID),
    (0x1FA00, 0x1FA53, L::AL),
    (0x1FA54, 0x1FAC2, L::ID),
    (0x1FAC3, 0x1FAC5, L::EB),
    (0x1FAC6, 0x1FAEF, L::ID),
    (0x1FAF0, 0x1FAF6, L::EB),
    (0x1FAF7, 0x1FAFF, L::ID),
    (0x1FB00, 0x1FB92, L::AL),
    (0x1FB94, 0x1FBCA, L::AL),
    (0x1FBF0, 0x1FBF9, L::NU),
    (0x1FC00, 0x1FFFD, L::ID),
    (0x20000, 0x2FFFD, L::ID),
    (0x30000, 0x3FFFD, L::ID),
    (0xE0001, 0xE0001, L::CM),
    (0xE0020, 0xE007F, L::CM),
    (0xE0100, 0xE01EF, L::CM),
];

/// East_Asian_Width ranges (plus `Z` for nonspacing); code points not covered are `N`.
pub(crate) static EAST_ASIAN_WIDTH: &[(u32, u32, W)] = &[
    (0x0020, 0x007E, W::Narrow),
    (0x00A1, 0x00A1, W::Ambiguous),
    (0x00A2, 0x00A3, W::Narrow),
    (0x00A4, 0x00A4, W::Ambiguous),
    (0x00A5, 0x00A6, W::Narrow),
    (0x00A7, 0x00A8, W::Ambiguous),
    (0x00AA, 0x00AA, W::Ambiguous),
    (0x00AC, 0x00AC, W::Narrow),
    (0x00AD, 0x00AE, W::Ambiguous),
    (0x00AF, 0x00AF, W::Narrow),
    (0x00B0, 0x00B4, W::Ambiguous),
    (0x00B6, 0x00BA, W::Ambiguous),
    (0x00BC, 0x00BF, W::Ambiguous),
    (0x00C6, 0x00C6, W::Ambiguous),
    (0x00D0, 0x00D0, W::Ambiguous),
    (0x00D7, 0x00D8, W::Ambiguous),
    (0x00DE, 0x00E1, W::Ambiguous),
    (0x00E6, 0x00E6, W::Ambiguous),
    (0x00E8, 0x00EA, W::Ambiguous),
    (0x00EC, 0x00ED, W::Ambiguous),
    (0x00F0, 0x00F0, W::Ambiguous),
    (0x00F2, 0x00F3, W::Ambiguous),
    (0x00F7, 0x00FA, W::Ambiguous),
    (0x00FC, 0x00FC, W::Ambiguous),
    (0x00FE, 0x00FE, W::Ambiguous),
    (0x0101, 0x0101, W::Ambiguous),
    (0x0111, 0x0111, W::Ambiguous),
    (0x0113, 0x0113, W::Ambiguous),
    (0x011B, 0x011B, W::Ambiguous),
    (0x0126, 0x0127, W::Ambiguous),
    (0x012B, 0x012B, W::Ambiguous),
    (0x0131, 0x0133, W::Ambiguous),
    (0x0138, 0x0138, W::Ambiguous),
    (0x013F, 0x0142, W::Ambiguous),
    (0x0144, 0x0144, W::Ambiguous),
    (0x0148, 0x014B, W::Ambiguous),
    (0x014D, 0x014D, W::Ambiguous),
    (0x0152, 0x0153, W::Ambiguous),
    (0x0166, 0x0167, W::Ambiguous),
    (0x016B, 0x016B, W::Ambiguous),
    (0x01CE, 0x01CE, W::Ambiguous),
    (0x01D0, 0x01D0, W::Ambiguous),
    (0x01D2, 0x01D2, W::Ambiguous),
    (0x01D4, 0x01D4, W::Ambiguous),
    (0x01D6, 0x01D6, W::Ambiguous),
    (0x01D8, 0x01D8, W::Ambiguous),
    (0x01DA, 0x01DA, W::Ambiguous),
    (0x01DC, 0x01DC, W::Ambiguous),
    (0x0251, 0x0251, W::Ambiguous),
    (0x0261, 0x0261, W::Ambiguous),
    (0x02C4, 0x02C4, W::Ambiguous),
    (0x02C7, 0x02C7, W::Ambiguous),
    (0x02C9, 0x02CB, W::Ambiguous),
    (0x02CD, 0x02CD, W::Ambiguous),
    (0x02D0, 0x02D0, W::Ambiguous),
    (0x02D8, 0x02DB, W::Ambiguous),
    (0x02DD, 0x02DD, W::Ambiguous),
    (0x02DF, 0x02DF, W::Ambiguous),
    (0x0300, 0x036F, W::Zero),
    (0x0391, 0x03A1, W::Ambiguous),
    (0x03A3, 0x03A9, W::Ambiguous),
    (0x03B1, 0x03C1, W::Ambiguous),
    (0x03C3, 0x03C9, W::Ambiguous),
    (0x0401, 0x0401, W::Ambiguous),
    (0x0410, 0x044F, W::Ambiguous),
    (0x0451, 0x0451, W::Ambiguous),
    (0x0483, 0x0489, W::Zero),
    (0x0591, 0x05BD, W::Zero),
    (0x05BF, 0x05BF, W::Zero),
    (0x05C1, 0x05C2, W::Zero),
    (0x05C4, 0x05C5, W::Zero),
    (0x05C7, 0x05C7, W::Zero),
    (0x0600, 0x0605, W::Zero),
    (0x0610, 0x061A, W::Zero),
    (0x061C, 0x061C, W::Zero),
    (0x064B, 0x065F, W::Zero),
    (0x0670, 0x0670, W::Zero),
    (0x06D6, 0x06DD, W::Zero),
    (0x06DF, 0x06E4, W::Zero),
    (0x06E7, 0x06E8, W::Zero),
    (0x06EA, 0x06ED, W::Zero),
    (0x070F, 0x070F, W::Zero),
    (0x0711, 0x0711, W::Zero),
    (0x0730, 0x074A, W::Zero),
    (0x07A6, 0x07B0, W::Zero),
    (0x07EB, 0x07F3, W::Zero),
    (0x07FD, 0x07FD, W::Zero),
    (0x0816, 0x0819, W::Zero),
    (0x081B, 0x0823, W::Zero),
    (0x0825, 0x0827, W::Zero),
    (0x0829, 0x082D, W::Zero),
    (0x0859, 0x085B, W::Zero),
    (0x0890, 0x0891, W::Zero),
    (0x0898, 0x089F, W::Zero),
    (0x08CA, 0x0902, W::Zero),
    (0x093A, 0x093A, W::Zero),
    (0x093C, 0x093C, W::Zero),
    (0x0941, 0x0948, W::Zero),
    (0x094D, 0x094D, W::Zero),
    (0x0951, 0x0957, W::Zero),
    (0x0962, 0x0963, W::Zero),
    (0x0981, 0x0981, W::Zero),
    (0x09BC, 0x09BC, W::Zero),
    (0x09C1, 0x09C4, W::Zero),
    (0x09CD, 0x09CD, W::Zero),
    (0x09E2, 0x09E3, W::Zero),
    (0x09FE, 0x09FE, W::Zero),
    (0x0A01, 0x0A02, W::Zero),
    (0x0A3C, 0x0A3C, W::Zero),
    (0x0A41, 0x0A42, W::Zero),
    (0x0A47, 0x0A48, W::Zero),
    (0x0A4B, 0x0A4D, W::Zero),
    (0x0A51, 0x0A51, W::Zero),
    (0x0A70, 0x0A71, W::Zero),
    (0x0A75, 0x0A75, W::Zero),
    (0x0A81, 0x0A82, W::Zero),
    (0x0ABC, 0x0ABC, W::Zero),
    (0x0AC1, 0x0AC5, W::Zero),
    (0x0AC7, 0x0AC8, W::Zero),
    (0x0ACD, 0x0ACD, W::Zero),
    (0x0AE2, 0x0AE3, W::Zero),
    (0x0AFA, 0x0AFF, W::Zero),
    (0x0B01, 0x0B01, W::Zero),
    (0x0B3C, 0x0B3C, W::Zero),
    (0x0B3F, 0x0B3F, W::Zero),
    (0x0B41, 0x0B44, W::Zero),
    (0x0B4D, 0x0B4D, W::Zero),
    (0x0B55, 0x0B56, W::Zero),
    (0x0B62, 0x0B63, W::Zero),
    (0x0B82, 0x0B82, W::Zero),
    (0x0BC0, 0x0BC0, W::Zero),
    (0x0BCD, 0x0BCD, W::Zero),
    (0x0C00, 0x0C00, W::Zero),
    (0x0C04, 0x0C04, W::Zero),
    (0x0C3C, 0x0C3C, W::Zero),
    (0x0C3E, 0x0C40, W::Zero),
    (0x0C46, 0x0C48, W::Zero),
    (0x0C4A, 0x0C4D, W::Zero),
    (0x0C55, 0x0C56, W::Zero),
    (0x0C62, 0x0C63, W::Zero),
    (0x0C81, 0x0C81, W::Zero),
    (0x0CBC, 0x0CBC, W::Zero),
    (0x0CBF, 0x0CBF, W::Zero),
    (0x0CC6, 0x0CC6, W::Zero),
    (0x0CCC, 0x0CCD, W::Zero),
    (0x0CE2, 0x0CE3, W::Zero),
    (0x0D00, 0x0D01, W::Zero),
    (0x0D3B, 0x0D3C, W::Zero),
    (0x0D41, 0x0D44, W::Zero),
    (0x0D4D, 0x0D4D, W::Zero),
    (0x0D62, 0x0D63, W::Zero),
    (0x0D81, 0x0D81, W::Zero),
    (0x0DCA, 0x0DCA, W::Zero),
    (0x0DD2, 0x0DD4, W::Zero),
    (0x0DD6, 0x0DD6, W::Zero),
    (0x0E31, 0x0E31, W::Zero),
    (0x0E34, 0x0E3A, W::Zero),
    (0x0E47, 0x0E4E, W::Zero),
    (0x0EB1, 0x0EB1, W::Zero),
    (0x0EB4, 0x0EBC, W::Zero),
    (0x0EC8, 0x0ECD, W::Zero),
    (0x0F18, 0x0F19, W::Zero),
    (0x0F35, 0x0F35, W::Zero),
    (0x0F37, 0x0F37, W::Zero),
    (0x0F39, 0x0F39, W::Zero),
    (0x0F71, 0x0F7E, W::Zero),
    (0x0F80, 0x0F84, W::Zero),
    (0x0F86, 0x0F87, W::Zero),
    (0x0F8D, 0x0F97, W::Zero),
    (0x0F99, 0x0FBC, W::Zero),
    (0x0FC6, 0x0FC6, W::Zero),
    (0x102D, 0x1030, W::Zero),
    (0x1032, 0x1037, W::Zero),
    (0x1039, 0x103A, W::Zero),
    (0x103D, 0x103E, W::Zero),
    (0x1058, 0x1059, W::Zero),
    (0x105E, 0x1060, W::Zero),
    (0x1071, 0x1074, W::Zero),
    (0x1082, 0x1082, W::Zero),
    (0x1085, 0x1086, W::Zero),
    (0x108D, 0x108D, W::Zero),
    (0x109D, 0x109D, W::Zero),
    (0x1100, 0x115F, W::Wide),
    (0x1160, 0x11FF, W::Zero),
    (0x135D, 0x135F, W::Zero),
    (0x1712, 0x1714, W::Zero),
    (0x1732, 0x1733, W::Zero),
    (0x1752, 0x1753, W::Zero),
    (0x1772, 0x1773, W::Zero),
    (0x17B4, 0x17B5, W::Zero),
    (0x17B7, 0x17BD, W::Zero),
    (0x17C6, 0x17C6, W::Zero),
    (0x17C9, 0x17D3, W::Zero),
    (0x17DD, 0x17DD, W::Zero),
    (0x180B, 0x180F, W::Zero),
    (0x1885, 0x1886, W::Zero),
    (0x18A9, 0x18A9, W::Zero),
    (0x1920, 0x1922, W::Zero),
    (0x1927, 0x1928, W::Zero),
    (0x1932, 0x1932, W::Zero),
    (0x1939, 0x193B, W::Zero),
    (0x1A17, 0x1A18, W::Zero),
    (0x1A1B, 0x1A1B, W::Zero),
    (0x1A56, 0x1A56, W::Zero),
    (0x1A58, 0x1A5E, W::Zero),
    (0x1A60, 0x1A60, W::Zero),
    (0x1A62, 0x1A62, W::Zero),
    (0x1A65, 0x1A6C, W::Zero),
    (0x1A73, 0x1A7C, W::Zero),
    (0x1A7F, 0x1A7F, W::Zero),
    (0x1AB0, 0x1ACE, W::Zero),
    (0x1B00, 0x1B03, W::Zero),
    (0x1B34, 0x1B34, W::Zero),
    (0x1B36, 0x1B3A, W::Zero),
    (0x1B3C, 0x1B3C, W::Zero),
    (0x1B42, 0x1B42, W::Zero),
    (0x1B6B, 0x1B73, W::Zero),
    (0x1B80, 0x1B81, W::Zero),
    (0x1BA2, 0x1BA5, W::Zero),
    (0x1BA8, 0x1BA9, W::Zero),
    (0x1BAB, 0x1BAD, W::Zero),
    (0x1BE6, 0x1BE6, W::Zero),
    (0x1BE8, 0x1BE9, W::Zero),
    (0x1BED, 0x1BED, W::Zero),
    (0x1BEF, 0x1BF1, W::Zero),
    (0x1C2C, 0x1C33, W::Zero),
    (0x1C36, 0x1C37, W::Zero),
    (0x1CD0, 0x1CD2, W::Zero),
    (0x1CD4, 0x1CE0, W::Zero),
    (0x1CE2, 0x1CE8, W::Zero),
    (0x1CED, 0x1CED, W::Zero),
    (0x1CF4, 0x1CF4, W::Zero),
    (0x1CF8, 0x1CF9, W::Zero),
    (0x1DC0, 0x1DFF, W::Zero),
    (0x200B, 0x200F, W::Zero),
    (0x2010, 0x2010, W::Ambiguous),
    (0x2013, 0x2016, W::Ambiguous),
    (0x2018, 0x2019, W::Ambiguous),
    (0x201C, 0x201D, W::Ambiguous),
    (0x2020, 0x2022, W::Ambiguous),
    (0x2024, 0x2027, W::Ambiguous),
    (0x202A, 0x202E, W::Zero),
    (0x2030, 0x2030, W::Ambiguous),
    (0x2032, 0x2033, W::Ambiguous),
    (0x2035, 0x2035, W::Ambiguous),
    (0x203B, 0x203B, W::Ambiguous),
    (0x203E, 0x203E, W::Ambiguous),
    (0x2060, 0x2064, W::Zero),
    (0x2066, 0x206F, W::Zero),
    (0x2074, 0x2074, W::Ambiguous),
    (0x207F, 0x207F, W::Ambiguous),
    (0x2081, 0x2084, W::Ambiguous),
    (0x20A9, 0x20A9, W::Halfwidth),
    (0x20AC, 0x20AC, W::Ambiguous),
    (0x20D0, 0x20F0, W::Zero),
    (0x2103, 0x2103, W::Ambiguous),
    (0x2105, 0x2105, W::Ambiguous),
    (0x2109, 0x2109, W::Ambiguous),
    (0x2113, 0x2113, W::Ambiguous),
    (0x2116, 0x2116, W::Ambiguous),
    (0x2121, 0x2122, W::Ambiguous),
    (0x2126, 0x2126, W::Ambiguous),
    (0x212B, 0x212B, W::Ambiguous),
    (0x2153, 0x2154, W::Ambiguous),
    (0x215B, 0x215E, W::Ambiguous),
    (0x2160, 0x216B, W::Ambiguous),
    (0x2170, 0x2179, W::Ambiguous),
    (0x2189, 0x2189, W::Ambiguous),
    (0x2190, 0x2199, W::Ambiguous),
    (0x21B8, 0x21B9, W::Ambiguous),
    (0x21D2, 0x21D2, W::Ambiguous),
    (0x21D4, 0x21D4, W::Ambiguous),
    (0x21E7, 0x21E7, W::Ambiguous),
    (0x2200, 0x2200, W::Ambiguous),
    (0x2202, 0x2203, W::Ambiguous),
    (0x2207, 0x2208, W::Ambiguous),
    (0x220B, 0x220B, W::Ambiguous),
    (0x220F, 0x220F, W::Ambiguous),
    (0x2211, 0x2211, W::Ambiguous),
    (0x2215, 0x2215, W::Ambiguous),
    (0x221A, 0x221A, W::Ambiguous),
    (0x221D, 0x2220, W::Ambiguous),
    (0x2223, 0x2223, W::Ambiguous),
    (0x2225, 0x2225, W::Ambiguous),
    (0x2227, 0x222C, W::Ambiguous),
    (0x222E, 0x222E, W::Ambiguous),
    (0x2234, 0x2237, W::Ambiguous),
    (0x223C, 0x223D, W::Ambiguous),
    (0x2248, 0x2248, W::Ambiguous),
    (0x224C, 0x224C, W::Ambiguous),
    (0x2252, 0x2252, W::Ambiguous),
    (0x2260, 0x2261, W::Ambiguous),
    (0x2264, 0x2267, W::Ambiguous),
    (0x226A, 0x226B, W::Ambiguous),
    (0x226E, 0x226F, W::Ambiguous),
    (0x2282, 0x2283, W::Ambiguous),
    (0x2286, 0x2287, W::Ambiguous),
    (0x2295, 0x2295, W::Ambiguous),
    (0x2299, 0x2299, W::Ambiguous),
    (0x22A5, 0x22A5, W::Ambiguous),
    (0x22BF, 0x22BF, W::Ambiguous),
    (0x2312, 0x2312, W::Ambiguous),
    (0x231A, 0x231B, W::Wide),
    (0x2329, 0x232A, W::Wide),
    (0x23E9, 0x23EC, W::Wide),
    (0x23F0, 0x23F0, W::Wide),
    (0x23F3, 0x23F3, W::Wide),
    (0x2460, 0x24E9, W::Ambiguous),
    (0x24EB, 0x254B, W::Ambiguous),
    (0x2550, 0x2573, W::Ambiguous),
    (0x2580, 0x258F, W::Ambiguous),
    (0x2592, 0x2595, W::Ambiguous),
    (0x25A0, 0x25A1, W::Ambiguous),
    (0x25A3, 0x25A9, W::Ambiguous),
    (0x25B2, 0x25B3, W::Ambiguous),
    (0x25B6, 0x25B7, W::Ambiguous),
    (0x25BC, 0x25BD, W::Ambiguous),
    (0x25C0, 0x25C1, W::Ambiguous),
    (0x25C6, 0x25C8, W::Ambiguous),
    (0x25CB, 0x25CB, W::Ambiguous),
    (0x25CE, 0x25D1, W::Ambiguous),
    (0x25E2, 0x25E5, W::Ambiguous),
    (0x25EF, 0x25EF, W::Ambiguous),
    (0x25FD, 0x25FE, W::Wide),
    (0x2605, 0x2606, W::Ambiguous),
    (0x2609, 0x2609, W::Ambiguous),
    (0x260E, 0x260F, W::Ambiguous),
    (0x2614, 0x2615, W::Wide),
    (0x261C, 0x261C, W::Ambiguous),
    (0x261E, 0x261E, W::Ambiguous),
    (0x2640, 0x2640, W::Ambiguous),
    (0x2642, 0x2642, W::Ambiguous),
    (0x2648, 0x2653, W::Wide),
    (0x2660, 0x2661, W::Ambiguous),
    (0x2663, 0x2665, W::Ambiguous),
    (0x2667, 0x266A, W::Ambiguous),
    (0x266C, 0x266D, W::Ambiguous),
    (0x266F, 0x266F, W::Ambiguous),
    (0x267F, 0x267F, W::Wide),
    (0x2693, 0x2693, W::Wide),
    (0x269E, 0x269F, W::Ambiguous),
    (0x26A1, 0x26A1, W::Wide),
    (0x26AA, 0x26AB, W::Wide),
    (0x26BD, 0x26BE, W::Wide),
    (0x26BF, 0x26BF, W::Ambiguous),
    (0x26C4, 0x26C5, W::Wide),
    (0x26C6, 0x26CD, W::Ambiguous),
    (0x26CE, 0x26CE, W::Wide),
    (0x26CF, 0x26D3, W::Ambiguous),
    (0x26D4, 0x26D4, W::Wide),
    (0x26D5, 0x26E1, W::Ambiguous),
    (0x26E3, 0x26E3, W::Ambiguous),
    (0x26E8, 0x26E9, W::Ambiguous),
    (0x26EA, 0x26EA, W::Wide),
    (0x26EB, 0x26F1, W::Ambiguous),
    (0x26F2, 0x26F3, W::Wide),
    (0x26F4, 0x26F4, W::Ambiguous),
    (0x26F5, 0x26F5, W::Wide),
    (0x26F6, 0x26F9, W::Ambiguous),
    (0x26FA, 0x26FA, W::Wide),
    (0x26FB, 0x26FC, W::Ambiguous),
    (0x26FD, 0x26FD, W::Wide),
    (0x26FE, 0x26FF, W::Ambiguous),
    (0x2705, 0x2705, W::Wide),
    (0x270A, 0x270B, W::Wide),
    (0x2728, 0x2728, W::Wide),
    (0x273D, 0x273D, W::Ambiguous),
    (0x274C, 0x274C, W::Wide),
    (0x274E, 0x274E, W::Wide),
    (0x2753, 0x2755, W::Wide),
    (0x2757, 0x2757, W::Wide),
    (0x2776, 0x277F, W::Ambiguous),
    (0x2795, 0x2797, W::Wide),
    (0x27B0, 0x27B0, W::Wide),
    (0x27BF, 0x27BF, W::Wide),
    (0x27E6, 0x27ED, W::Narrow),
    (0x2985, 0x2986, W::Narrow),
    (0x2B1B, 0x2B1C, W::Wide),
    (0x2B50, 0x2B50, W::Wide),
    (0x2B55, 0x2B55, W::Wide),
    (0x2B56, 0x2B59, W::Ambiguous),
    (0x2CEF, 0x2CF1, W::Zero),
    (0x2D7F, 0x2D7F, W::Zero),
    (0x2DE0, 0x2DFF, W::Zero),
    (0x2E80, 0x2E99, W::Wide),
    (0x2E9B, 0x2EF3, W::Wide),
    (0x2F00, 0x2FD5, W::Wide),
    (0x2FF0, 0x2FFB, W::Wide),
    (0x3000, 0x3000, W::Fullwidth),
    (0x3001, 0x3029, W::Wide),
    (0x302A, 0x302D, W::Zero),
    (0x302E, 0x303E, W::Wide),
    (0x3041, 0x3096, W::Wide),
    (0x3099, 0x309A, W::Zero),
    (0x309B, 0x30FF, W::Wide),
    (0x3105, 0x312F, W::Wide),
    (0x3131, 0x318E, W::Wide),
    (0x3190, 0x31E3, W::Wide),
    (0x31F0, 0x321E, W::Wide),
    (0x3220, 0x3247, W::Wide),
    (0x3248, 0x324F, W::Ambiguous),
    (0x3250, 0x4DBF, W::Wide),
    (0x4E00, 0xA48C, W::Wide),
    (0xA490, 0xA4C6, W::Wide),
    (0xA66F, 0xA672, W::Zero),
    (0xA674, 0xA67D, W::Zero),
    (0xA69E, 0xA69F, W::Zero),
    (0xA6F0, 0xA6F1, W::Zero),
    (0xA802, 0xA802, W::Zero),
    (0xA806, 0xA806, W::Zero),
    (0xA80B, 0xA80B, W::Zero),
    (0xA825, 0xA826, W::Zero),
    (0xA82C, 0xA82C, W::Zero),
    (0xA8C4, 0xA8C5, W::Zero),
    (0xA8E0, 0xA8F1, W::Zero),
    (0xA8FF, 0xA8FF, W::Zero),
    (0xA926, 0xA92D, W::Zero),
    (0xA947, 0xA951, W::Zero),
    (0xA960, 0xA97C, W::Wide),
    (0xA980, 0xA982, W::Zero),
    (0xA9B3, 0xA9B3, W::Zero),
    (0xA9B6, 0xA9B9, W::Zero),
    (0xA9BC, 0xA9BD, W::Zero),
    (0xA9E5, 0xA9E5, W::Zero),
    (0xAA29, 0xAA2E, W::Zero),
    (0xAA31, 0xAA32, W::Zero),
    (0xAA35, 0xAA36, W::Zero),
    (0xAA43, 0xAA43, W::Zero),
    (0xAA4C, 0xAA4C, W::Zero),
    (0xAA7C, 0xAA7C, W::Zero),
    (0xAAB0, 0xAAB0, W::Zero),
    (0xAAB2, 0xAAB4, W::Zero),
    (0xAAB7, 0xAAB8, W::Zero),
    (0xAABE, 0xAABF, W::Zero),
    (0xAAC1, 0xAAC1, W::Zero),
    (0xAAEC, 0xAAED, W::Zero),
    (0xAAF6, 0xAAF6, W::Zero),
    (0xABE5, 0xABE5, W::Zero),
    (0xABE8, 0xABE8, W::Zero),
    (0xABED, 0xABED, W::Zero),
    (0xAC00, 0xD7A3, W::Wide),
    (0xD7B0, 0xD7FF, W::Zero),
    (0xE000, 0xF8FF, W::Ambiguous),
    (0xF900, 0xFAFF, W::Wide),
    (0xFB1E, 0xFB1E, W::Zero),
    (0xFE00, 0xFE0F, W::Zero),
    (0xFE10, 0xFE19, W::Wide),
    (0xFE20, 0xFE2F, W::Zero),
    (0xFE30, 0xFE52, W::Wide),
    (0xFE54, 0xFE66, W::Wide),
    (0xFE68, 0xFE6B, W::Wide),
    (0xFEFF, 0xFEFF, W::Zero),
    (0xFF01, 0xFF60, W::Fullwidth),
    (0xFF61, 0xFFBE, W::Halfwidth),
    (0xFFC2, 0xFFC7, W::Halfwidth),
    (0xFFCA, 0xFFCF, W::Halfwidth),
    (0xFFD2, 0xFFD7, W::Halfwidth),
    (0xFFDA, 0xFFDC, W::Halfwidth),
    (0xFFE0, 0xFFE6, W::Fullwidth),
    (0xFFE8, 0xFFEE, W::Halfwidth),
    (0xFFF9, 0xFFFB, W::Zero),
    (0xFFFD, 0xFFFD, W::Ambiguous),
    (0x101FD, 0x101FD, W::Zero),
    (0x102E0, 0x102E0, W::Zero),
    (0x10376, 0x1037A, W::Zero),
    (0x10A01, 0x10A03, W::Zero),
    (0x10A05, 0x10A06, W::Zero),
    (0x10A0C, 0x10A0F, W::Zero),
    (0x10A38, 0x10A3A, W::Zero),
    (0x10A3F, 0x10A3F, W::Zero),
    (0x10AE5, 0x10AE6, W::Zero),
    (0x10D24, 0x10D27, W::Zero),
    (0x10EAB, 0x10EAC, W::Zero),
    (0x10F46, 0x10F50, W::Zero),
    (0x10F82, 0x10F85, W::Zero),
    (0x11001, 0x11001, W::Zero),
    (0x11038, 0x11046, W::Zero),
    (0x11070, 0x11070, W::Zero),
    (0x11073, 0x11074, W::Zero),
    (0x1107F, 0x11081, W::Zero),
    (0x110B3, 0x110B6, W::Zero),
    (0x110B9, 0x110BA, W::Zero),
    (0x110BD, 0x110BD, W::Zero),
    (0x110C2, 0x110C2, W::Zero),
    (0x110CD, 0x110CD, W::Zero),
    (0x11100, 0x11102, W::Zero),
    (0x11127, 0x1112B, W::Zero),
    (0x1112D, 0x11134, W::Zero),
    (0x11173, 0x11173, W::Zero),
    (0x11180, 0x11181, W::Zero),
    (0x111B6, 0x111BE, W::Zero),
    (0x111C9, 0x111CC, W::Zero),
    (0x111CF, 0x111CF, W::Zero),
    (0x1122F, 0x11231, W::Zero),
    (0x11234, 0x11234, W::Zero),
    (0x11236, 0x11237, W::Zero),
    (0x1123E, 0x1123E, W::Zero),
    (0x112DF, 0x112DF, W::Zero),
    (0x112E3, 0x112EA, W::Zero),
    (0x11300, 0x11301, W::Zero),
    (0x1133B, 0x1133C, W::Zero),
    (0x11340, 0x11340, W::Zero),
    (0x11366, 0x1136C, W::Zero),
    (0x11370, 0x11374, W::Zero),
    (0x11438, 0x1143F, W::Zero),
    (0x11442, 0x11444, W::Zero),
    (0x11446, 0x11446, W::Zero),
    (0x1145E, 0x1145E, W::Zero),
    (0x114B3, 0x114B8, W::Zero),
    (0x114BA, 0x114BA, W::Zero),
    (0x114BF, 0x114C0, W::Zero),
    (0x114C2, 0x114C3, W::Zero),
    (0x115B2, 0x115B5, W::Zero),
    (0x115BC, 0x115BD, W::Zero),
    (0x115BF, 0x115C0, W::Zero),
    (0x115DC, 0x115DD, W::Zero),
    (0x11633, 0x1163A, W::Zero),
    (0x1163D, 0x1163D, W::Zero),
    (0x1163F, 0x11640, W::Zero),
    (0x116AB, 0x116AB, W::Zero),
    (0x116AD, 0x116AD, W::Zero),
    (0x116B0, 0x116B5, W::Zero),
    (0x116B7, 0x116B7, W::Zero),
    (0x1171D, 0x1171F, W::Zero),
    (0x11722, 0x11725, W::Zero),
    (0x11727, 0x1172B, W::Zero),
    (0x1182F, 0x11837, W::Zero),
    (0x11839, 0x1183A, W::Zero),
    (0x1193B, 0x1193C, W::Zero),
    (0x1193E, 0x1193E, W::Zero),
    (0x11943, 0x11943, W::Zero),
    (0x119D4, 0x119D7, W::Zero),
    (0x119DA, 0x119DB, W::Zero),
    (0x119E0, 0x119E0, W::Zero),
    (0x11A01, 0x11A0A, W::Zero),
    (0x11A33, 0x11A38, W::Zero),
    (0x11A3B, 0x11A3E, W::Zero),
    (0x11A47, 0x11A47, W::Zero),
    (0x11A51, 0x11A56, W::Zero),
    (0x11A59, 0x11A5B, W::Zero),
    (0x11A8A, 0x11A96, W::Zero),
    (0x11A98, 0x11A99, W::Zero),
    (0x11C30, 0x11C36, W::Zero),
    (0x11C38, 0x11C3D, W::Zero),
    (0x11C3F, 0x11C3F, W::Zero),
    (0x11C92, 0x11CA7, W::Zero),
    (0x11CAA, 0x11CB0, W::Zero),
    (0x11CB2, 0x11CB3, W::Zero),
    (0x11CB5, 0x11CB6, W::Zero),
    (0x11D31, 0x11D36, W::Zero),
    (0x11D3A, 0x11D3A, W::Zero),
    (0x11D3C, 0x11D3D, W::Zero),
    (0x11D3F, 0x11D45, W::Zero),
    (0x11D47, 0x11D47, W::Zero),
    (0x11D90, 0x11D91, W::Zero),
    (0x11D95, 0x11D95, W::Zero),
    (0x11D97, 0x11D97, W::Zero),
    (0x11EF3, 0x11EF4, W::Zero),
    (0x13430, 0x13438, W::Zero),
    (0x16AF0, 0x16AF4, W::Zero),
    (0x16B30, 0x16B36, W::Zero),
    (0x16F4F, 0x16F4F, W::Zero),
    (0x16F8F, 0x16F92, W::Zero),
    (0x16FE0, 0x16FE3, W::Wide),
    (0x16FE4, 0x16FE4, W::Zero),
    (0x16FF0, 0x16FF1, W::Wide),
    (0x17000, 0x187F7, W::Wide),
    (0x18800, 0x18CD5, W::Wide),
    (0x18D00, 0x18D08, W::Wide),
    (0x1AFF0, 0x1AFF3, W::Wide),
    (0x1AFF5, 0x1AFFB, W::Wide),
    (0x1AFFD, 0x1AFFE, W::Wide),
    (0x1B000, 0x1B122, W::Wide),
    (0x1B150, 0x1B152, W::Wide),
    (0x1B164, 0x1B167, W::Wide),
    (0x1B170, 0x1B2FB, W::Wide),
    (0x1BC9D, 0x1BC9E, W::Zero),
    (0x1BCA0, 0x1BCA3, W::Zero),
    (0x1CF00, 0x1CF2D, W::Zero),
    (0x1CF30, 0x1CF46, W::Zero),
    (0x1D167, 0x1D169, W::Zero),
    (0x1D173, 0x1D182, W::Zero),
    (0x1D185, 0x1D18B, W::Zero),
    (0x1D1AA, 0x1D1AD, W::Zero),
    (0x1D242, 0x1D244, W::Zero),
    (0x1DA00, 0x1DA36, W::Zero),
    (0x1DA3B, 0x1DA6C, W::Zero),
    (0x1DA75, 0x1DA75, W::Zero),
    (0x1DA84, 0x1DA84, W::Zero),
    (0x1DA9B, 0x1DA9F, W::Zero),
    (0x1DAA1, 0x1DAAF, W::Zero),
    (0x1E000, 0x1E006, W::Zero),
    (0x1E008, 0x1E018, W::Zero),
    (0x1E01B, 0x1E021, W::Zero),
    (0x1E023, 0x1E024, W::Zero),
    (0x1E026, 0x1E02A, W::Zero),
    (0x1E130, 0x1E136, W::Zero),
    (0x1E2AE, 0x1E2AE, W::Zero),
    (0x1E2EC, 0x1E2EF, W::Zero),
    (0x1E8D0, 0x1E8D6, W::Zero),
    (0x1E944, 0x1E94A, W::Zero),
    (0x1F004, 0x1F004, W::Wide),
    (0x1F0CF, 0x1F0CF, W::Wide),
    (0x1F100, 0x1F10A, W::Ambiguous),
    (0x1F110, 0x1F12D, W::Ambiguous),
    (0x1F130, 0x1F169, W::Ambiguous),
    (0x1F170, 0x1F18D, W::Ambiguous),
    (0x1F18E, 0x1F18E, W::Wide),
    (0x1F18F, 0x1F190, W::Ambiguous),
    (0x1F191, 0x1F19A, W::Wide),
    (0x1F19B, 0x1F1AC, W::Ambiguous),
    (0x1F200, 0x1F202, W::Wide),
    (0x1F210, 0x1F23B, W::Wide),
    (0x1F240, 0x1F248, W::Wide),
    (0x1F250, 0x1F251, W::Wide),
    (0x1F260, 0x1F265, W::Wide),
    (0x1F300, 0x1F320, W::Wide),
    (0x1F32D, 0x1F335, W::Wide),
    (0x1F337, 0x1F37C, W::Wide),
    (0x1F37E, 0x1F393, W::Wide),
    (0x1F3A0, 0x1F3CA, W::Wide),
    (0x1F3CF, 0x1F3D3, W::Wide),
    (0x1F3E0, 0x1F3F0, W::Wide),
    (0x1F3F4, 0x1F3F4, W::Wide),
    (0x1F3F8, 0x1F43E, W::Wide),
    (0x1F440, 0x1F440, W::Wide),
    (0x1F442, 0x1F4FC, W::Wide),
    (0x1F4FF, 0x1F53D, W::Wide),
    (0x1F54B, 0x1F54E, W::Wide),
    (0x1F550, 0x1F567, W::Wide),
    (0x1F57A, 0x1F57A, W::Wide),
    (0x1F595, 0x1F596, W::Wide),
    (0x1F5A4, 0x1F5A4, W::Wide),
    (0x1F5FB, 0x1F64F, W::Wide),
    (0x1F680, 0x1F6C5, W::Wide),
    (0x1F6CC, 0x1F6CC, W::Wide),
    (0x1F6D0, 0x1F6D2, W::Wide),
    (0x1F6D5, 0x1F6D7, W::Wide),
    (0x1F6DD, 0x1F6DF, W::Wide),
    (0x1F6EB, 0x1F6EC, W::Wide),
    (0x1F6F4, 0x1F6FC, W::Wide),
    (0x1F7E0, 0x1F7EB, W::Wide),
    (0x1F7F0, 0x1F7F0, W::Wide),
    (0x1F90C, 0x1F93A, W::Wide),
    (0x1F93C, 0x1F945, W::Wide),
    (0x1F947, 0x1F9FF, W::Wide),
    (0x1FA70, 0x1FA74, W::Wide),
    (0x1FA78, 0x1FA7C, W::Wide),
    (0x1FA80, 0x1FA86, W::Wide),
    (0x1FA90, 0x1FAAC, W::Wide),
    (0x1FAB0, 0x1FABA, W::Wide),
    (0x1FAC0, 0x1FAC5, W::Wide),
    (0x1FAD0, 0x1FAD9, W::Wide),
    (0x1FAE0, 0x1FAE7, W::Wide),
    (0x1FAF0, 0x1FAF6, W::Wide),
    (0x20000, 0x2FFFD, W::Wide),
    (0x30000, 0x3FFFD, W::Wide),
    (0xE0001, 0xE0001, W::Zero),
    (0xE0020, 0xE007F, W::Zero),
    (0xE0100, 0xE01EF, W::Zero),
    (0xF0000, 0xFFFFD, W::Ambiguous),
    (0x100000, 0x10FFFD, W::Ambiguous),
];

/// Extended_Pictographic code points that are still unassigned.
pub(crate) static UNASSIGNED_PICTOGRAPHIC: &[(u32, u32)] = &[
    (0x1F02C, 0x1F02F),
    (0x1F094, 0x1F09F),
    (0x1F0AF, 0x1F0B0),
    (0x1F0C0, 0x1F0C0),
    (0x1F0D0, 0x1F0D0),
    (0x1F0F6, 0x1F0FF),
    (0x1F1AE, 0x1F1E5),
    (0x1F203, 0x1F20F),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F24F),
    (0x1F252, 0x1F25F),
    (0x1F266, 0x1F2FF),
    (0x1F6D8, 0x1F6DC),
    (0x1F6ED, 0x1F6EF),
    (0x1F6FD, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D9, 0x1F7DF),
    (0x1F7EC, 0x1F7EF),
    (0x1F7F1, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8AF),
    (0x1F8B2, 0x1F8FF),
    (0x1FA54, 0x1FA5F),
    (0x1FA6E, 0x1FA6F),
    (0x1FA75, 0x1FA77),
    (0x1FA7D, 0x1FA7F),
    (0x1FA87, 0x1FA8F),
    (0x1FAAD, 0x1FAAF),
    (0x1FABB, 0x1FABF),
    (0x1FAC6, 0x1FACF),
    (0x1FADA, 0x1FADF),
    (0x1FAE8, 0x1FAEF),
    (0x1FAF7, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];
