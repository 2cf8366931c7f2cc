use std::io::{self, Write};

pub fn prompt_line(message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut line = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if bytes_read == 0 {
        return Err("Input stream closed".to_string());
    }

    Ok(line)
}

pub fn prompt_number(message: &str, min: usize, max: usize) -> Result<usize, String> {
    loop {
        let line = prompt_line(message)?;
        match line.trim().parse::<usize>() {
            Ok(number) if (min..=max).contains(&number) => return Ok(number),
            _ => println!("Enter a number between {} and {}.", min, max),
        }
    }
}

pub fn prompt_yes_no(message: &str) -> Result<bool, String> {
    loop {
        let line = prompt_line(message)?;
        match line.trim() {
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            _ => println!("Enter y or n."),
        }
    }
}
