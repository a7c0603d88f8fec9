//! Table-driven disassembler: decodes one instruction word (plus, for
//! `MEMB` and REG float-table entries, its trailing displacement word)
//! into a textual mnemonic and operand list.

use crate::bits::{extract, sign_extend_13, sign_extend_24};
use std::fmt::Write as _;

const REGS: [&str; 32] = [
    "pfp", "sp", "rip", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13",
    "r14", "r15", "g0", "g1", "g2", "g3", "g4", "g5", "g6", "g7", "g8", "g9", "g10", "g11",
    "g12", "g13", "g14", "fp",
];

fn freg_name(i: u32) -> String {
    match i {
        16 => "0.0".to_string(),
        22 => "1.0".to_string(),
        _ => format!("fp{i}"),
    }
}

/// Render one operand: `m` selects literal-vs-register, `s` selects the
/// special/floating register file, `fp` further narrows `s` to the
/// floating-point register names (vs. `sf0..sf31`).
fn arg(m: bool, s: bool, i: u32, fp: bool) -> String {
    if s {
        if fp {
            freg_name(i)
        } else {
            format!("sf{i}")
        }
    } else if m {
        i.to_string()
    } else {
        REGS[i as usize].to_string()
    }
}

fn imm(x: u32) -> String {
    if x < 10 {
        x.to_string()
    } else {
        format!("0x{x:x}")
    }
}

struct Inval;

impl Inval {
    fn render(len: u32, op: u32, disp: u32) -> (String, u32) {
        let text = if len == 8 {
            format!(".word\t0x{op:08x}, 0x{disp:08x}")
        } else {
            format!(".word\t0x{op:08x}")
        };
        (text, len)
    }
}

fn ctrl_name(i: u32) -> Option<(&'static str, bool)> {
    // (mnemonic, has a displacement operand)
    Some(match i {
        0x08 => ("b", true),
        0x09 => ("call", true),
        0x0A => ("ret", false),
        0x0B => ("bal", true),
        0x10 => ("bno", true),
        0x11 => ("bg", true),
        0x12 => ("be", true),
        0x13 => ("bge", true),
        0x14 => ("bl", true),
        0x15 => ("bne", true),
        0x16 => ("ble", true),
        0x17 => ("bo", true),
        0x18 => ("faultno", false),
        0x19 => ("faultg", false),
        0x1A => ("faulte", false),
        0x1B => ("faultge", false),
        0x1C => ("faultl", false),
        0x1D => ("faultne", false),
        0x1E => ("faultle", false),
        0x1F => ("faulto", false),
        _ => return None,
    })
}

fn ctrl(ip: u32, op: u32, disp: i32) -> (String, u32) {
    let i = (op >> 24) & 31;
    let t = (op >> 1) & 1 != 0;
    let r = op & 1 != 0;

    let Some((name, has_disp)) = ctrl_name(i) else {
        return Inval::render(4, op, disp as u32);
    };
    if r {
        return Inval::render(4, op, disp as u32);
    }

    let mut s = format!("{name}{}", if t { ".f" } else { "" });
    if has_disp {
        let efa = ip.wrapping_add(disp as u32);
        write!(s, "\t{}", imm(efa)).unwrap();
    }
    (s, 4)
}

fn cobr_name(i: u32) -> Option<&'static str> {
    Some(match i {
        0x00 => "testno",
        0x01 => "testg",
        0x02 => "teste",
        0x03 => "testge",
        0x04 => "testl",
        0x05 => "testne",
        0x06 => "testle",
        0x07 => "testo",
        0x10 => "bbc",
        0x11 => "cmpobg",
        0x12 => "cmpobe",
        0x13 => "cmpobge",
        0x14 => "cmpobl",
        0x15 => "cmpobne",
        0x16 => "cmpoble",
        0x17 => "bbs",
        0x18 => "cmpibno",
        0x19 => "cmpibg",
        0x1A => "cmpibe",
        0x1B => "cmpibge",
        0x1C => "cmpibl",
        0x1D => "cmpibne",
        0x1E => "cmpible",
        0x1F => "cmpibo",
        _ => return None,
    })
}

fn cobr(ip: u32, op: u32, disp: i32) -> (String, u32) {
    let i = (op >> 24) & 31;
    let c = (op >> 19) & 31;
    let b = (op >> 14) & 31;
    let a = c;
    let s3 = (op >> 13) & 1 != 0;
    let m1 = s3;
    let t = (op >> 1) & 1 != 0;
    let s2 = op & 1 != 0;

    let Some(name) = cobr_name(i) else {
        return Inval::render(4, op, disp as u32);
    };

    let mut s = format!("{name}{}", if t { ".f" } else { "" });
    if i & 0x10 != 0 {
        write!(s, "\t{}", arg(m1, false, a, false)).unwrap();
        write!(s, ", {}", arg(false, s2, b, false)).unwrap();
        write!(s, ", {}", imm(ip.wrapping_add(disp as u32))).unwrap();
    } else {
        write!(s, "\t{}", arg(false, s3, c, false)).unwrap();
    }
    (s, 4)
}

/// `F[16]`: bit 0 index, bit 1 base, bit 2 imm/disp, bit 3 width-8 (`MEMB`).
const MEM_MODE_FLAGS: [u8; 16] = [
    0x4, 0x4, 0x4, 0x4, 0x2, 0x8, 0x0, 0x3, 0x6, 0x6, 0x6, 0x6, 0xC, 0xE, 0xD, 0xF,
];

fn mem_name(i: u32) -> Option<(&'static str, u8)> {
    Some(match i {
        0x00 => ("ldob", 2),
        0x02 => ("stob", 1),
        0x04 => ("bx", 0),
        0x05 => ("balx", 2),
        0x06 => ("callx", 0),
        0x08 => ("ldos", 2),
        0x0A => ("stos", 1),
        0x0C => ("lda", 2),
        0x10 => ("ld", 2),
        0x12 => ("st", 1),
        0x18 => ("ldl", 2),
        0x1A => ("stl", 1),
        0x20 => ("ldt", 2),
        0x22 => ("stt", 1),
        0x2C => ("dcinva", 0),
        0x30 => ("ldq", 2),
        0x32 => ("stq", 1),
        0x40 => ("ldib", 2),
        0x42 => ("stib", 1),
        0x48 => ("ldis", 2),
        0x4A => ("stis", 1),
        _ => return None,
    })
}

fn mem(ip: u32, op: u32, disp: u32) -> (String, u32) {
    let i = (op >> 24) & 127;
    let c = (op >> 19) & 31;
    let b = (op >> 14) & 31;
    let mode = (op >> 10) & 15;
    let a = op & 31;
    let s2 = (op >> 6) & 1 != 0;
    let s1 = (op >> 5) & 1 != 0;
    let scale: u32 = 1 << ((op >> 7) & 7);

    let len = if MEM_MODE_FLAGS[mode as usize] & 8 != 0 { 8 } else { 4 };

    let Some((name, args)) = mem_name(i) else {
        return Inval::render(len, op, disp);
    };
    if mode == 6 {
        return Inval::render(len, op, disp);
    }

    let mut s = format!("{name}\t");
    if args & 1 != 0 {
        write!(s, "{}, ", arg(false, false, c, false)).unwrap();
    }

    if mode == 5 {
        write!(s, "{}", imm(ip.wrapping_add(8).wrapping_add(disp))).unwrap();
    }
    let flags = MEM_MODE_FLAGS[mode as usize];
    if flags & 4 != 0 {
        write!(s, "{}", imm(disp)).unwrap();
    }
    if flags & 2 != 0 {
        write!(s, "({})", arg(false, s2, b, false)).unwrap();
    }
    if flags & 1 != 0 {
        let index = arg(false, s1, a, false);
        if scale == 1 {
            write!(s, "[{index}]").unwrap();
        } else {
            write!(s, "[{index}*{scale}]").unwrap();
        }
    }

    if args & 2 != 0 {
        write!(s, ", {}", arg(false, false, c, false)).unwrap();
    }

    (s, len)
}

fn reg_name(i: u32) -> Option<(&'static str, u8)> {
    Some(match i {
        0x180 => ("notbit", 7),
        0x181 => ("and", 7),
        0x182 => ("andnot", 7),
        0x183 => ("setbit", 7),
        0x184 => ("notand", 7),
        0x186 => ("xor", 7),
        0x187 => ("or", 7),
        0x188 => ("nor", 7),
        0x189 => ("xnor", 7),
        0x18A => ("not", 5),
        0x18B => ("ornot", 7),
        0x18C => ("clrbit", 7),
        0x18D => ("notor", 7),
        0x18E => ("nand", 7),
        0x18F => ("alterbit", 7),
        0x190 => ("addo", 7),
        0x191 => ("addi", 7),
        0x192 => ("subo", 7),
        0x193 => ("subi", 7),
        0x194 => ("cmpob", 3),
        0x195 => ("cmpib", 3),
        0x196 => ("cmpos", 3),
        0x197 => ("cmpis", 3),
        0x198 => ("shro", 7),
        0x19A => ("shrdi", 7),
        0x19B => ("shri", 7),
        0x19C => ("shlo", 7),
        0x19D => ("rotate", 7),
        0x19E => ("shli", 7),
        0x1A0 => ("cmpo", 3),
        0x1A1 => ("cmpi", 3),
        0x1A2 => ("concmpo", 3),
        0x1A3 => ("concmpi", 3),
        0x1A4 => ("cmpinco", 7),
        0x1A5 => ("cmpinci", 7),
        0x1A6 => ("cmpdeco", 7),
        0x1A7 => ("cmpdeci", 7),
        0x1AC => ("scanbyte", 3),
        0x1AD => ("bswap", 5),
        0x1AE => ("chkbit", 3),
        0x1B0 => ("addc", 7),
        0x1B2 => ("subc", 7),
        0x1B4 => ("intdis", 0),
        0x1B5 => ("inten", 0),
        0x1CC => ("mov", 5),
        0x1D8 => ("eshro", 7),
        0x1DC => ("movl", 5),
        0x1EC => ("movt", 5),
        0x1FC => ("movq", 5),
        0x200 => ("synmov", 3),
        0x201 => ("synmovl", 3),
        0x202 => ("synmovq", 3),
        0x203 => ("cmpstr", 7),
        0x204 => ("movqstr", 7),
        0x205 => ("movstr", 7),
        0x210 => ("atmod", 7),
        0x212 => ("atadd", 7),
        0x213 => ("inspacc", 5),
        0x214 => ("ldphy", 5),
        0x215 => ("synld", 5),
        0x217 => ("fill", 7),
        0x230 => ("sdma", 7),
        0x231 => ("udma", 0),
        0x240 => ("spanbit", 5),
        0x241 => ("scanbit", 5),
        0x242 => ("daddc", 7),
        0x243 => ("dsubc", 7),
        0x244 => ("dmovt", 5),
        0x245 => ("modac", 7),
        0x246 => ("condrec", 5),
        0x250 => ("modify", 7),
        0x251 => ("extract", 7),
        0x254 => ("modtc", 7),
        0x255 => ("modpc", 7),
        0x256 => ("receive", 5),
        0x258 => ("intctl", 5),
        0x259 => ("sysctl", 7),
        0x25B => ("icctl", 7),
        0x25C => ("dcctl", 7),
        0x25D => ("halt", 0),
        0x260 => ("calls", 1),
        0x262 => ("send", 7),
        0x263 => ("sendserv", 1),
        0x264 => ("resumprcs", 1),
        0x265 => ("schedprcs", 1),
        0x266 => ("saveprcs", 0),
        0x268 => ("condwait", 1),
        0x269 => ("wait", 1),
        0x26A => ("signal", 1),
        0x26B => ("mark", 0),
        0x26C => ("fmark", 0),
        0x26D => ("flushreg", 0),
        0x26F => ("syncf", 0),
        0x270 => ("emul", 7),
        0x271 => ("ediv", 7),
        0x273 => ("ldtime", 4),
        0x274 => ("cvtir", 13),
        0x275 => ("cvtilr", 13),
        0x276 => ("scalerl", 15),
        0x277 => ("scaler", 15),
        0x280 => ("atanr", 15),
        0x281 => ("logepr", 15),
        0x282 => ("logr", 15),
        0x283 => ("remr", 15),
        0x284 => ("cmpor", 11),
        0x285 => ("cmpr", 11),
        0x288 => ("sqrtr", 13),
        0x289 => ("expr", 13),
        0x28A => ("logbnr", 13),
        0x28B => ("roundr", 13),
        0x28C => ("sinr", 13),
        0x28D => ("cosr", 13),
        0x28E => ("tanr", 13),
        0x28F => ("classr", 9),
        0x290 => ("atanrl", 15),
        0x291 => ("logeprl", 15),
        0x292 => ("logrl", 15),
        0x293 => ("remrl", 15),
        0x294 => ("cmporl", 11),
        0x295 => ("cmprl", 11),
        0x298 => ("sqrtrl", 13),
        0x299 => ("exprl", 13),
        0x29A => ("logbnrl", 13),
        0x29B => ("roundrl", 13),
        0x29C => ("sinrl", 13),
        0x29D => ("cosrl", 13),
        0x29E => ("tanrl", 13),
        0x29F => ("classrl", 9),
        0x2C0 => ("cvtri", 13),
        0x2C1 => ("cvtril", 13),
        0x2C2 => ("cvtzri", 13),
        0x2C3 => ("cvtzril", 13),
        0x2C9 => ("movr", 13),
        0x2D9 => ("movrl", 13),
        0x2E1 => ("movre", 13),
        0x2E2 => ("cpysre", 15),
        0x2E3 => ("cpyrsre", 15),
        0x301 => ("mulo", 7),
        0x308 => ("remo", 7),
        0x30B => ("divo", 7),
        0x341 => ("muli", 7),
        0x348 => ("remi", 7),
        0x349 => ("modi", 7),
        0x34B => ("divi", 7),
        0x380 => ("addono", 7),
        0x381 => ("addino", 7),
        0x382 => ("subono", 7),
        0x383 => ("subino", 7),
        0x384 => ("selno", 7),
        0x38B => ("divr", 15),
        0x38C => ("mulr", 15),
        0x38D => ("subr", 15),
        0x38F => ("addr", 15),
        0x390 => ("addog", 7),
        0x391 => ("addig", 7),
        0x392 => ("subog", 7),
        0x393 => ("subig", 7),
        0x394 => ("selg", 7),
        0x39B => ("divrl", 15),
        0x39C => ("mulrl", 15),
        0x39D => ("subrl", 15),
        0x39F => ("addrl", 15),
        0x3A0 => ("addoe", 7),
        0x3A1 => ("addie", 7),
        0x3A2 => ("suboe", 7),
        0x3A3 => ("subie", 7),
        0x3A4 => ("sele", 7),
        0x3B0 => ("addoge", 7),
        0x3B1 => ("addige", 7),
        0x3B2 => ("suboge", 7),
        0x3B3 => ("subige", 7),
        0x3B4 => ("selge", 7),
        0x3C0 => ("addol", 7),
        0x3C1 => ("addil", 7),
        0x3C2 => ("subol", 7),
        0x3C3 => ("subil", 7),
        0x3C4 => ("sell", 7),
        0x3D0 => ("addone", 7),
        0x3D1 => ("addine", 7),
        0x3D2 => ("subone", 7),
        0x3D3 => ("subine", 7),
        0x3D4 => ("selne", 7),
        0x3E0 => ("addole", 7),
        0x3E1 => ("addile", 7),
        0x3E2 => ("subole", 7),
        0x3E3 => ("subile", 7),
        0x3E4 => ("selle", 7),
        0x3F0 => ("addoo", 7),
        0x3F1 => ("addio", 7),
        0x3F2 => ("suboo", 7),
        0x3F3 => ("subio", 7),
        0x3F4 => ("selo", 7),
        _ => return None,
    })
}

fn reg(op: u32) -> (String, u32) {
    let i = ((op >> 20) & 0x3F0) | ((op >> 7) & 0xF);

    let Some((name, args)) = reg_name(i) else {
        return Inval::render(4, op, 0);
    };

    let c = (op >> 19) & 31;
    let b = (op >> 14) & 31;
    let a = op & 31;

    let s3 = (op >> 13) & 1 != 0;
    let m2 = (op >> 12) & 1 != 0;
    let m1 = (op >> 11) & 1 != 0;
    let s2 = (op >> 6) & 1 != 0;
    let s1 = (op >> 5) & 1 != 0;

    let fp = args & 8 != 0;

    let mut s = name.to_string();
    let mut sep = "\t";
    if args & 1 != 0 {
        write!(s, "{sep}{}", arg(m1, s1, a, fp)).unwrap();
        sep = ", ";
    }
    if args & 2 != 0 {
        write!(s, "{sep}{}", arg(m2, s2, b, fp)).unwrap();
        sep = ", ";
    }
    if args & 4 != 0 {
        write!(s, "{sep}{}", arg(false, s3, c, fp)).unwrap();
    }

    (s, 4)
}

fn ctrl_disp(op: u32) -> i32 {
    sign_extend_24(op & 0x00FF_FFFF) & !3
}

fn cobr_disp(op: u32) -> i32 {
    sign_extend_13(op & 0x1FFC) & !3
}

fn mem_disp(op: u32, disp: u32) -> u32 {
    if op & 0x1000 != 0 {
        disp
    } else {
        op & 0xFFF
    }
}

/// Disassemble one instruction. `ip` is the address of `op`; `disp` is the
/// trailing 32-bit displacement word already fetched from `ip + 4` (used
/// only by `MEMB` encodings, ignored otherwise). Returns the rendered
/// mnemonic text and the instruction's length in bytes (4 or 8).
#[must_use]
pub fn disassemble(ip: u32, op: u32, disp: u32) -> (String, u32) {
    let line = extract(op, 28, 4);
    if line >= 8 {
        mem(ip, op, mem_disp(op, disp))
    } else if line >= 4 {
        reg(op)
    } else if line >= 2 {
        cobr(ip, op, cobr_disp(op))
    } else {
        ctrl(ip, op, ctrl_disp(op))
    }
}
