//! Menu-driven console session over a profile service
//!
//! The shell owns input collection and re-prompting; every value it hands to
//! the service has already passed the console's own checks. Reaching the end
//! of input behaves like choosing Exit.

use std::io::{self, BufRead, Write};

use tracing::debug;

use health_profile_domain::entities::{CreateProfileRequest, UpdateProfileRequest};
use health_profile_domain::services::{ProfileServiceError, ProfileServiceTrait};

const MENU: &str = "\nHealth Profile Manager\n\
1. Create Profile\n\
2. View Profile\n\
3. Update Profile\n\
4. Delete Profile\n\
5. Save Profiles to File\n\
6. Load Profiles from File\n\
7. Display All Profiles\n\
8. Exit\n\
Choose an option: ";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    View,
    Update,
    Delete,
    Save,
    Load,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1 to 8) to its entry
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Create),
            2 => Some(MenuChoice::View),
            3 => Some(MenuChoice::Update),
            4 => Some(MenuChoice::Delete),
            5 => Some(MenuChoice::Save),
            6 => Some(MenuChoice::Load),
            7 => Some(MenuChoice::DisplayAll),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// A numeric prompt and the rule its answer must satisfy
struct NumberPrompt {
    prompt: &'static str,
    rule: &'static str,
    accept: fn(f64) -> bool,
}

fn positive(value: f64) -> bool {
    value > 0.0
}

fn non_negative(value: f64) -> bool {
    value >= 0.0
}

const CREATE_PROMPTS: [NumberPrompt; 4] = [
    NumberPrompt { prompt: "Enter weight (kg): ", rule: "Weight must be positive.", accept: positive },
    NumberPrompt { prompt: "Enter height (m): ", rule: "Height must be positive.", accept: positive },
    NumberPrompt {
        prompt: "Enter body temperature (°C): ",
        rule: "Body temperature must be positive.",
        accept: positive,
    },
    NumberPrompt {
        prompt: "Enter blood sugar level (mg/dL): ",
        rule: "Blood sugar level cannot be negative.",
        accept: non_negative,
    },
];

const UPDATE_PROMPTS: [NumberPrompt; 4] = [
    NumberPrompt { prompt: "Enter new weight (kg): ", rule: "Weight must be positive.", accept: positive },
    NumberPrompt { prompt: "Enter new height (m): ", rule: "Height must be positive.", accept: positive },
    NumberPrompt {
        prompt: "Enter new body temperature (°C): ",
        rule: "Body temperature must be positive.",
        accept: positive,
    },
    NumberPrompt {
        prompt: "Enter new blood sugar level (mg/dL): ",
        rule: "Blood sugar level cannot be negative.",
        accept: non_negative,
    },
];

/// Interactive console session
pub struct Shell<S, R, W> {
    service: S,
    input: R,
    output: W,
}

impl<S, R, W> Shell<S, R, W>
where
    S: ProfileServiceTrait,
    R: BufRead,
    W: Write,
{
    pub fn new(service: S, input: R, output: W) -> Self {
        Self { service, input, output }
    }

    /// Hand back the service and output once the session is over
    pub fn into_parts(self) -> (S, W) {
        (self.service, self.output)
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                return Ok(());
            };

            let number = match line.parse::<u32>() {
                Ok(number) => number,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number between 1 and 8.")?;
                    continue;
                }
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            debug!("Menu choice: {:?}", choice);

            let finished = match choice {
                MenuChoice::Create => self.create()?,
                MenuChoice::View => self.view()?,
                MenuChoice::Update => self.update()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Save => self.save()?,
                MenuChoice::Load => self.load()?,
                MenuChoice::DisplayAll => self.display_all()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
            };
            if finished.is_none() {
                return Ok(());
            }
        }
    }

    /// Read one trimmed line; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_name(&mut self) -> io::Result<Option<String>> {
        let mut text = "Enter name: ".to_string();
        loop {
            let Some(name) = self.prompt(&text)? else {
                return Ok(None);
            };
            if name.is_empty() {
                text = "Name cannot be empty. Enter name: ".to_string();
            } else if name.chars().any(char::is_whitespace) {
                text = "Name must be a single word. Enter name: ".to_string();
            } else {
                return Ok(Some(name));
            }
        }
    }

    fn prompt_number(&mut self, spec: &NumberPrompt) -> io::Result<Option<f64>> {
        let mut text = spec.prompt.to_string();
        loop {
            let Some(answer) = self.prompt(&text)? else {
                return Ok(None);
            };
            match answer.parse::<f64>().ok().filter(|value| value.is_finite()) {
                Some(value) if (spec.accept)(value) => return Ok(Some(value)),
                Some(_) => text = format!("{} {}", spec.rule, spec.prompt),
                None => text = format!("Please enter a valid number. {}", spec.prompt),
            }
        }
    }

    /// Ask for the four measurements in order
    fn prompt_measurements(&mut self, prompts: &[NumberPrompt; 4]) -> io::Result<Option<[f64; 4]>> {
        let mut values = [0.0; 4];
        for (slot, spec) in values.iter_mut().zip(prompts.iter()) {
            let Some(value) = self.prompt_number(spec)? else {
                return Ok(None);
            };
            *slot = value;
        }
        Ok(Some(values))
    }

    fn report_error(&mut self, err: ProfileServiceError) -> io::Result<()> {
        match err {
            ProfileServiceError::NotFound(_) => writeln!(self.output, "Profile not found."),
            ProfileServiceError::FileOpenFailure(_) => writeln!(self.output, "Error opening file."),
            ProfileServiceError::ValidationError(msg) => writeln!(self.output, "Invalid input: {}", msg),
            other => writeln!(self.output, "Error: {}", other),
        }
    }

    fn create(&mut self) -> io::Result<Option<()>> {
        let Some(name) = self.prompt_name()? else {
            return Ok(None);
        };
        let Some([weight, height, body_temperature, blood_sugar_level]) =
            self.prompt_measurements(&CREATE_PROMPTS)?
        else {
            return Ok(None);
        };

        let request = CreateProfileRequest::new(name.clone(), weight, height, body_temperature, blood_sugar_level);
        match self.service.create_profile(request) {
            Ok(()) => writeln!(self.output, "Profile for {} created successfully.", name)?,
            Err(err) => self.report_error(err)?,
        }
        Ok(Some(()))
    }

    fn view(&mut self) -> io::Result<Option<()>> {
        let Some(name) = self.prompt_name()? else {
            return Ok(None);
        };
        match self.service.read_profile(&name) {
            Ok(record) => write!(self.output, "{}", record.render())?,
            Err(err) => self.report_error(err)?,
        }
        Ok(Some(()))
    }

    fn update(&mut self) -> io::Result<Option<()>> {
        let Some(name) = self.prompt_name()? else {
            return Ok(None);
        };
        let Some([weight, height, body_temperature, blood_sugar_level]) =
            self.prompt_measurements(&UPDATE_PROMPTS)?
        else {
            return Ok(None);
        };

        let request = UpdateProfileRequest::new(weight, height, body_temperature, blood_sugar_level);
        match self.service.update_profile(&name, request) {
            Ok(()) => writeln!(self.output, "Profile updated.")?,
            Err(err) => self.report_error(err)?,
        }
        Ok(Some(()))
    }

    fn delete(&mut self) -> io::Result<Option<()>> {
        let Some(name) = self.prompt_name()? else {
            return Ok(None);
        };
        match self.service.delete_profile(&name) {
            Ok(()) => writeln!(self.output, "Profile deleted.")?,
            Err(err) => self.report_error(err)?,
        }
        Ok(Some(()))
    }

    fn save(&mut self) -> io::Result<Option<()>> {
        match self.service.save_profiles() {
            Ok(_) => writeln!(self.output, "Profiles saved to file.")?,
            Err(err) => self.report_error(err)?,
        }
        Ok(Some(()))
    }

    fn load(&mut self) -> io::Result<Option<()>> {
        match self.service.load_profiles() {
            Ok(report) => {
                writeln!(self.output, "Profiles loaded from file.")?;
                if let Some(malformed) = report.malformed {
                    writeln!(
                        self.output,
                        "Stopped at malformed line {} ({}); {} profile(s) loaded.",
                        malformed.line, malformed.reason, report.loaded
                    )?;
                }
            }
            Err(err) => self.report_error(err)?,
        }
        Ok(Some(()))
    }

    fn display_all(&mut self) -> io::Result<Option<()>> {
        for record in self.service.list_profiles() {
            write!(self.output, "{}", record.render())?;
        }
        Ok(Some(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Create));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::DisplayAll));
        assert_eq!(MenuChoice::from_number(8), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(9), None);
    }

    #[test]
    fn test_number_rules() {
        assert!(positive(0.1));
        assert!(!positive(0.0));
        assert!(non_negative(0.0));
        assert!(!non_negative(-0.1));
    }
}
