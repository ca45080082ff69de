use alurom::{
    assembler::Assembler,
    error::AssemblyError,
    memory::MemoryTable,
    operator::OperatorTable,
    RomImage,
};

fn read_source() -> &'static str {
    include_str!("doodle.asm")
}

fn read_rom() -> &'static str {
    include_str!("doodle.rom").trim_end()
}

#[test]
fn test_doodle_assemble() {
    let image = alurom::assemble(read_source())
        .expect("could not assemble doodle.asm");

    println!("{}", image);

    assert_eq!(image.len(), 18);
    assert_eq!(image.to_string(), read_rom());
}

#[test]
fn test_doodle_read_rom() {
    let image = RomImage::parse(read_rom()).unwrap();

    assert_eq!(image, alurom::assemble(read_source()).unwrap());

    // The last line of the source is the first ROM entry.
    assert_eq!(image.instructions()[0].to_string(), "{b000010, b000001, b100100, b000001}");
    assert_eq!(image.instructions()[17].to_string(), "{b000001, b001000, b100100, b001000}");
}

#[test]
fn test_doodle_disassemble() {
    let image = RomImage::parse(read_rom()).unwrap();

    let lines = image.disassemble(OperatorTable::standard(), MemoryTable::standard())
        .unwrap();

    for line in &lines {
        println!("{}", line);
    }

    assert_eq!(lines[0], "cooldown = cooldown - ONE");
    assert_eq!(lines[17], "tick_period = tick_period * ONE");
    assert_eq!(lines[15], "qn0 = score >> THREE");
    assert_eq!(lines[16], "doodle0 = DOODLE_SPRITE0");

    let reassembled = Assembler::standard().assemble_lines(&lines).unwrap();
    assert_eq!(reassembled, image);
}

#[test]
fn test_unknown_name_aborts() {
    let source = format!("{}score = unknown_name + ONE\nreg0 = reg1\n", read_source());
    let line = read_source().lines().count() + 1;

    match alurom::assemble(&source) {
        Err(AssemblyError::UnresolvedMemoryReference { name, line: at, .. }) => {
            assert_eq!(name, "unknown_name");
            assert_eq!(at, line);
        },
        Ok(image) => panic!("expected an error, got {}", image),
    }
}

#[test]
fn test_synthetic_tables() {
    let operators = OperatorTable::new(vec![
        ("+", alurom::instruction::FunctionCode::new(0).unwrap()),
    ]).unwrap();
    let memory = MemoryTable::new(vec!["ZERO", "ONE", "score"]).unwrap();

    let image = Assembler::new(&operators, &memory)
        .assemble("score = score + ONE")
        .unwrap();

    assert_eq!(image.to_string(), "{\n{b000000, b000010, b000001, b000010}\n};");
}
