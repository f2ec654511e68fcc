//! Interactive driver for the 6502 emulator.
//!
//! Assembles the bundled program (or the file named on the command line),
//! loads it into memory with the RESET vector pointing at its origin, and
//! hands control to a single-letter command REPL that steps the CPU one
//! clock beat at a time.

use std::cell::RefCell;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;

use emu6502::{assemble, Bus, BusDevice, DeviceHandle, Memory, Program, CPU, RESET_VECTOR};

/// Reads and assembles a source file. `None` when the file cannot be read or
/// yields no byte code; the specifics have already been logged.
fn compile_file(path: &str) -> Option<Program> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            log::error!("cannot read source file \"{}\": {}", path, error);
            return None;
        }
    };

    let program = assemble(&source);
    if program.is_empty() {
        log::error!("source file \"{}\" produced no byte code", path);
        return None;
    }

    Some(program)
}

/// Prints `count` 16-byte rows of memory starting at `start`.
fn dump_memory(memory: &Rc<RefCell<Memory>>, start: u16, count: usize) {
    for row in memory.borrow().dump_rows(start, count) {
        println!("{}", row);
    }
}

/// Prints one 256-byte page.
fn dump_page(memory: &Rc<RefCell<Memory>>, page: u8) {
    dump_memory(memory, (page as u16) << 8, 16);
}

fn print_help() {
    println!("Available commands:");
    println!("\tR - Reset CPU");
    println!("\tI - Interrupt request");
    println!("\tN - Non-maskable interrupt");
    println!("\tE - Execute until cycles complete");
    println!("\tP - Print program counter page");
    println!("\tS - Print stack page");
    println!("\tZ - Print zero page");
    println!("\tV - Print last page (vectors)");
    println!("\tM - Print entire memory");
    println!("\tX - Exit program");
    println!("\tAny other character will run 1 cycle");
}

fn main() -> ExitCode {
    env_logger::init();

    println!("MOS-6502 Processor Emulation");
    println!("============================");

    let path = env::args().nth(1).unwrap_or_else(|| "program.asm".to_string());
    let Some(program) = compile_file(&path) else {
        return ExitCode::FAILURE;
    };

    // Wire the machine: memory behind the bus, the bus behind the CPU. The
    // driver keeps the concrete memory handle for its dump commands.
    let memory = Rc::new(RefCell::new(Memory::new()));
    memory
        .borrow_mut()
        .write_bytes(program.origin, &program.bytecode);
    memory.borrow_mut().write_word(RESET_VECTOR, program.origin);

    let handle: DeviceHandle = memory.clone();
    let bus = Bus::new_handle(Some(handle));
    let mut cpu = CPU::new(Some(bus));
    cpu.reset();

    println!("Loaded \"{}\" at ${:04X}", path, program.origin);
    println!("Starting CPU state: {}", cpu);
    println!();
    print_help();

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("{} > ", cpu);
        let _ = io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break, // EOF or broken stdin ends the session
            Ok(_) => {}
        }

        let Some(command) = input.trim().chars().next() else {
            continue;
        };

        match command.to_ascii_uppercase() {
            'R' => {
                println!("Reset...");
                cpu.reset();
            }
            'I' => {
                println!("Interrupt request...");
                cpu.irq();
            }
            'N' => {
                println!("Non-maskable interrupt...");
                cpu.nmi();
            }
            'E' => while cpu.tick() {},
            'P' => dump_page(&memory, (cpu.pc() >> 8) as u8),
            'S' => dump_page(&memory, 0x01),
            'Z' => dump_page(&memory, 0x00),
            'V' => dump_page(&memory, 0xFF),
            'M' => dump_memory(&memory, 0x0000, 0x1000),
            'X' => break,
            _ => {
                cpu.tick();
            }
        }
    }

    println!("Exiting program");
    println!("Ending CPU state: {}", cpu);

    ExitCode::SUCCESS
}
