use honggfuzz::fuzz;
use lzw12::{decode, unpack_codes};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // Either outcome is fine; panics are not.
            let _ = decode(data);
            let _ = lzw12::decode_codes(&unpack_codes(data));
        });
    }
}
