use crate::cpu::RESET_VECTOR;
use crate::memory::Memory;
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs;
use std::io::{BufReader, Read};

/// Loads a program image: a two byte little endian load address followed by
/// raw code. Returns the load address. When the image leaves the reset
/// vector empty, the vector is pointed at the load address so the program
/// starts where it was loaded.
pub fn load_file(filename: &str, memory: &mut Memory) -> Result<u16, std::io::Error> {
    let mut reader = BufReader::new(fs::File::open(filename)?);

    let origin = reader.read_u16::<LittleEndian>()?;
    let mut image = Vec::new();
    reader.read_to_end(&mut image)?;

    memory.load(origin, &image);

    if memory.read_byte_debug(RESET_VECTOR) == 0
        && memory.read_byte_debug(RESET_VECTOR.wrapping_add(1)) == 0
    {
        memory.load(RESET_VECTOR, &[origin as u8, (origin >> 8) as u8]);
    }

    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs::File;
    use std::io::Write;

    fn image_file(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        File::create(&path).unwrap().write_all(bytes).unwrap();
        path
    }

    #[test]
    fn loads_the_image_at_its_header_address() {
        let path = image_file("em6502_loader_basic.prg", &[0x00, 0x50, 0xa9, 0x05, 0xea]);
        let mut memory = Memory::new();

        let origin = load_file(path.to_str().unwrap(), &mut memory).unwrap();

        assert_eq!(origin, 0x5000);
        assert_eq!(memory.read_byte_debug(0x5000), 0xa9);
        assert_eq!(memory.read_byte_debug(0x5001), 0x05);
        assert_eq!(memory.read_byte_debug(0x5002), 0xea);
    }

    #[test]
    fn seeds_an_empty_reset_vector_with_the_load_address() {
        let path = image_file("em6502_loader_vector.prg", &[0x00, 0x50, 0xea]);
        let mut memory = Memory::new();

        load_file(path.to_str().unwrap(), &mut memory).unwrap();

        assert_eq!(memory.read_byte_debug(RESET_VECTOR), 0x00);
        assert_eq!(memory.read_byte_debug(RESET_VECTOR.wrapping_add(1)), 0x50);
    }

    #[test]
    fn leaves_a_provided_reset_vector_alone() {
        let path = image_file("em6502_loader_keep.prg", &[0x00, 0x50, 0xea]);
        let mut memory = Memory::new();
        memory.load(RESET_VECTOR, &[0x40, 0x60]);

        load_file(path.to_str().unwrap(), &mut memory).unwrap();

        assert_eq!(memory.read_byte_debug(RESET_VECTOR), 0x40);
        assert_eq!(memory.read_byte_debug(RESET_VECTOR.wrapping_add(1)), 0x60);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut memory = Memory::new();

        assert!(load_file("/nonexistent/image.prg", &mut memory).is_err());
    }
}
