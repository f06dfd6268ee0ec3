//! Interactive records shell.
//!
//! Menu-driven session covering the whole system: student and course
//! management, enrollments, grading, CSV import/export and backup. All
//! records live in memory for the duration of the session; import/export is
//! the only way to carry data across sessions.

use campus_records::config::Config;
use campus_records::core::backup::backup_directory;
use campus_records::core::models::{Course, Semester, Student};
use campus_records::core::services::{
    CourseService, EnrollmentService, GradingService, StudentService,
};
use campus_records::core::transfer;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Run the interactive shell until the user exits
pub fn run(config: &Config) {
    let mut shell = Shell::new(config.clone());
    shell.run();
}

/// Session state: the in-memory stores plus the services acting on them
struct Shell {
    config: Config,
    students: StudentService,
    courses: CourseService,
    enrollment: EnrollmentService,
    grading: GradingService,
}

impl Shell {
    fn new(config: Config) -> Self {
        Self {
            config,
            students: StudentService::new(),
            courses: CourseService::new(),
            enrollment: EnrollmentService::new(),
            grading: GradingService::new(),
        }
    }

    fn run(&mut self) {
        loop {
            println!("\n==== Campus Course & Records Manager ====");
            println!("1. Manage Students");
            println!("2. Manage Courses");
            println!("3. Manage Enrollments");
            println!("4. Manage Grades");
            println!("5. Import/Export Data");
            println!("6. Backup Data");
            println!("0. Exit");

            match self.read_choice("Please select an option: ") {
                Some(0) => break,
                Some(1) => self.student_menu(),
                Some(2) => self.course_menu(),
                Some(3) => self.enrollment_menu(),
                Some(4) => self.grading_menu(),
                Some(5) => self.transfer_menu(),
                Some(6) => self.backup_data(),
                _ => println!("✗ Invalid option. Please try again."),
            }
        }
        println!("Exiting. Goodbye!");
    }

    // --- Student management ---

    fn student_menu(&mut self) {
        println!("\n-- Student Management --");
        println!("1. Add a new student");
        println!("2. List all students");
        println!("3. Deactivate a student");

        match self.read_choice("Select an option: ") {
            Some(1) => self.add_student(),
            Some(2) => self.list_students(),
            Some(3) => self.deactivate_student(),
            _ => println!("✗ Invalid option."),
        }
    }

    fn add_student(&mut self) {
        let id = self.prompt("Enter Student ID: ");
        let registration = self.prompt("Enter Registration Number: ");
        let name = self.prompt("Enter Full Name: ");
        let email = self.prompt("Enter Email: ");

        if self.students.add(Student::new(id, registration, name, email)) {
            println!("✓ Student added successfully!");
        } else {
            println!("✗ A student with that registration number already exists.");
        }
    }

    fn list_students(&self) {
        println!("\n-- All Students --");
        if self.students.is_empty() {
            println!("(no students on record)");
            return;
        }
        for student in self.students.list() {
            println!("{}", student.profile());
        }
    }

    fn deactivate_student(&mut self) {
        let registration = self.prompt("Enter Student Registration Number: ");
        if self.students.deactivate(&registration) {
            println!("✓ Student '{registration}' has been deactivated.");
        } else {
            println!("✗ No student found with registration number '{registration}'.");
        }
    }

    // --- Course management ---

    fn course_menu(&mut self) {
        println!("\n-- Course Management --");
        println!("1. Add a new course");
        println!("2. List all courses");

        match self.read_choice("Select an option: ") {
            Some(1) => self.add_course(),
            Some(2) => self.list_courses(),
            _ => println!("✗ Invalid option."),
        }
    }

    fn add_course(&mut self) {
        let code = self.prompt("Enter Course Code: ");
        let title = self.prompt("Enter Course Title: ");

        let Some(credits) = self
            .prompt("Enter Credits (positive integer): ")
            .parse::<u32>()
            .ok()
        else {
            println!("✗ Credits must be a number.");
            return;
        };
        if credits == 0 {
            println!("✗ Credits must be a positive integer.");
            return;
        }

        let instructor = self.prompt("Enter Instructor ID (optional): ");
        let instructor_id = if instructor.is_empty() {
            None
        } else {
            Some(instructor)
        };

        let semester: Semester =
            match self.prompt("Enter Semester (SPRING, SUMMER, FALL): ").parse() {
                Ok(semester) => semester,
                Err(e) => {
                    println!("✗ {e}");
                    return;
                }
            };
        let department = self.prompt("Enter Department: ");

        let course = Course::new(code, title, credits, instructor_id, semester, department);
        if self.courses.add(course) {
            println!("✓ Course added successfully!");
        } else {
            println!("✗ A course with that code already exists.");
        }
    }

    fn list_courses(&self) {
        println!("\n-- All Courses --");
        if self.courses.is_empty() {
            println!("(no courses on record)");
            return;
        }
        for course in self.courses.list() {
            println!("{course}");
        }
    }

    // --- Enrollment management ---

    fn enrollment_menu(&mut self) {
        println!("\n-- Enrollment Management --");
        println!("1. Enroll a student in a course");
        println!("2. View a student's enrollments");

        match self.read_choice("Select an option: ") {
            Some(1) => self.enroll_student(),
            Some(2) => self.view_enrollments(),
            _ => println!("✗ Invalid option."),
        }
    }

    fn enroll_student(&mut self) {
        let registration = self.prompt("Enter Student Registration Number: ");
        let code = self.prompt("Enter Course Code: ");

        let Some(course) = self.courses.get(&code).cloned() else {
            println!("✗ Course not found with code: {code}");
            return;
        };
        let Some(student) = self.students.get_mut(&registration) else {
            println!("✗ Student not found with registration number: {registration}");
            return;
        };

        if self.enrollment.enroll(student, &course) {
            println!("✓ Enrollment successful!");
        } else {
            println!("✗ Enrollment failed: already enrolled in '{code}'.");
        }
    }

    fn view_enrollments(&self) {
        let registration = self.prompt("Enter Student Registration Number: ");
        match self.students.get(&registration) {
            Some(student) => println!("{}", student.profile()),
            None => println!("✗ Student not found with registration number: {registration}"),
        }
    }

    // --- Grading management ---

    fn grading_menu(&mut self) {
        println!("\n-- Grading Management --");
        println!("1. Assign marks to a student");
        println!("2. View a student's transcript");

        match self.read_choice("Select an option: ") {
            Some(1) => self.assign_marks(),
            Some(2) => self.view_transcript(),
            _ => println!("✗ Invalid option."),
        }
    }

    fn assign_marks(&mut self) {
        let registration = self.prompt("Enter Student Registration Number: ");
        let code = self.prompt("Enter Course Code: ");
        let Some(marks) = self.prompt("Enter Marks (0-100): ").parse::<u32>().ok() else {
            println!("✗ Marks must be a number.");
            return;
        };

        let Some(student) = self.students.get_mut(&registration) else {
            println!("✗ Student not found with registration number: {registration}");
            return;
        };

        match self.grading.assign_marks(student, &code, marks) {
            Ok(grade) => println!("✓ Marks assigned; grade {grade}."),
            Err(e) => println!("✗ {e}"),
        }
    }

    fn view_transcript(&self) {
        let registration = self.prompt("Enter Student Registration Number: ");
        let Some(student) = self.students.get(&registration) else {
            println!("✗ Student not found with registration number: {registration}");
            return;
        };

        println!("\n-- Transcript for {} --", student.person.name);
        for entry in student.transcript() {
            println!("{entry}");
        }
        let gpa = self.grading.compute_gpa(student);
        println!("Cumulative GPA: {gpa:.2}");
    }

    // --- Import/export ---

    fn transfer_menu(&mut self) {
        println!("\n-- Data Import/Export --");
        println!("1. Import students from CSV");
        println!("2. Export students to CSV");
        println!("3. Import courses from CSV");
        println!("4. Export courses to CSV");

        let choice = self.read_choice("Select an option: ");
        match choice {
            Some(1) => {
                let path = self.prompt_for_file_path("students.csv");
                match transfer::import_students(&path, &mut self.students) {
                    Ok(count) => {
                        println!("✓ Imported {count} students from {}.", path.display());
                    }
                    Err(e) => println!("✗ Failed to import students: {e}"),
                }
            }
            Some(2) => {
                let path = self.prompt_for_file_path("students.csv");
                match transfer::export_students(&path, &self.students) {
                    Ok(()) => println!("✓ Exported students to {}.", path.display()),
                    Err(e) => println!("✗ Failed to export students: {e}"),
                }
            }
            Some(3) => {
                let path = self.prompt_for_file_path("courses.csv");
                match transfer::import_courses(&path, &mut self.courses) {
                    Ok(count) => {
                        println!("✓ Imported {count} courses from {}.", path.display());
                    }
                    Err(e) => println!("✗ Failed to import courses: {e}"),
                }
            }
            Some(4) => {
                let path = self.prompt_for_file_path("courses.csv");
                match transfer::export_courses(&path, &self.courses) {
                    Ok(()) => println!("✓ Exported courses to {}.", path.display()),
                    Err(e) => println!("✗ Failed to export courses: {e}"),
                }
            }
            _ => println!("✗ Invalid option. Please try again."),
        }
    }

    /// Offer the default data-directory path for a file, or take a custom one
    fn prompt_for_file_path(&self, default_file_name: &str) -> PathBuf {
        let default_path = Path::new(&self.config.paths.data_dir).join(default_file_name);
        println!("Default path: {}", default_path.display());

        let choice = self
            .prompt("Use the default path? Enter 'y' for yes, or 'n' to provide a custom path: ")
            .to_lowercase();
        match choice.as_str() {
            "n" | "no" => PathBuf::from(self.prompt("Please enter the full custom file path: ")),
            "y" | "yes" => default_path,
            _ => {
                println!("Invalid choice. Using default path.");
                default_path
            }
        }
    }

    // --- Backup ---

    fn backup_data(&self) {
        println!("\n-- Data Backup --");
        let source = PathBuf::from(&self.config.paths.data_dir);
        println!("Source directory: {}", source.display());

        let input = self.prompt(&format!(
            "Enter the destination directory [default: {}]: ",
            self.config.paths.backup_dir
        ));
        let destination = if input.is_empty() {
            PathBuf::from(&self.config.paths.backup_dir)
        } else {
            PathBuf::from(input)
        };

        match backup_directory(&source, &destination) {
            Ok(summary) => {
                println!(
                    "✓ Backup completed to '{}': {} files, {} directories created.",
                    destination.display(),
                    summary.files_copied,
                    summary.directories_created
                );
                if !summary.is_complete() {
                    println!(
                        "✗ {} entries failed to copy; see the log for details.",
                        summary.failures
                    );
                }
            }
            Err(e) => println!("✗ Backup failed: {e}"),
        }
    }

    // --- Input helpers ---

    /// Print a prompt and read one trimmed line from stdin
    fn prompt(&self, label: &str) -> String {
        print!("{label}");
        io::stdout().flush().ok();

        let mut line = String::new();
        io::stdin().read_line(&mut line).ok();
        line.trim().to_string()
    }

    /// Read a numeric menu choice; `None` on non-numeric input
    fn read_choice(&self, label: &str) -> Option<u32> {
        self.prompt(label).parse().ok()
    }
}
