use std::path::Path;
use std::time::Duration;

use fieldbug::config::Config;
use fieldbug::{bug, Field, Robot, RobotPort, SaveState, Side};

fn main() {
    let config = Config::load();

    let mut robot = if Path::new(&config.map.path).exists() {
        match SaveState::load_from_file(&config.map.path) {
            Ok(state) => match state.restore() {
                Ok(robot) => {
                    println!("Restored field from {}", config.map.path);
                    robot
                }
                Err(e) => {
                    eprintln!("Save file {} is unusable: {}", config.map.path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Failed to load {}: {}", config.map.path, e);
                std::process::exit(1);
            }
        }
    } else {
        let robot = demo_robot(&config);
        match SaveState::capture(&robot).save_to_file(&config.map.path) {
            Ok(()) => println!("Created demo field and saved it to {}", config.map.path),
            Err(e) => eprintln!("Warning: could not save the demo field: {}", e),
        }
        robot
    };

    robot.set_delay(Duration::from_millis(config.robot.delay_ms));
    if config.logging.enable_command_log {
        robot.enable_log();
    }

    let (width, height) = robot.size();
    println!(
        "Field {}x{}, frame {}, running the bug from ({}, {}) to ({}, {})",
        width,
        height,
        if robot.has_frame() { "on" } else { "off" },
        0,
        height - 1,
        width - 1,
        0
    );

    match bug::solve(&mut robot) {
        Ok(steps) => println!("Exit reached in {} steps", steps),
        Err(e) => {
            eprintln!("The bug gave up: {}", e);
            report_log(&mut robot, &config);
            std::process::exit(1);
        }
    }

    report_log(&mut robot, &config);
}

/// A small builtin maze: a vertical barrier across the middle with a
/// single gap at the bottom, so the bug has something to walk around
fn demo_robot(config: &Config) -> Robot {
    let width = config.field.width.max(2);
    let height = config.field.height.max(2);
    let mut field = Field::new(width, height);
    field.set_frame(config.field.frame);

    let barrier_x = width / 2;
    for y in 1..height {
        field.set_wall(barrier_x, y, Side::West, true);
    }

    let mut robot = Robot::new(field);
    robot.place(config.robot.start_x, config.robot.start_y);
    robot
}

fn report_log(robot: &mut Robot, config: &Config) {
    if let Some(log) = robot.take_log() {
        println!("{}", log.summary());
        match log.save_to_file(&config.logging.command_log_path) {
            Ok(()) => println!("Command log saved to {}", config.logging.command_log_path),
            Err(e) => eprintln!("Warning: could not save the command log: {}", e),
        }
    }
}
