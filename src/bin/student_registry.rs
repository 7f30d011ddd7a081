//! Demo: the student registry walkthrough (lookup, upsert, remove).

use spanr::StudentRegistry;

fn main() {
    env_logger::init();

    let mut students: StudentRegistry = [
        (101, "Alice".to_string()),
        (102, "Bob".to_string()),
        (103, "Charlie".to_string()),
    ]
    .into_iter()
    .collect();

    println!("Original student list:");
    print_all(&students);

    println!();
    println!("Look up ID 102: {}", students.lookup(102));
    println!("Look up ID 999: {}", students.lookup(999));

    println!();
    println!("Adding new student 104: Diana");
    students.upsert(104, "Diana");
    print_all(&students);

    println!();
    println!("Removing student 101");
    students.remove(101);
    print_all(&students);

    log::info!("{} students registered", students.len());
}

fn print_all(students: &StudentRegistry) {
    for (id, name) in students.list_all() {
        println!("ID: {}, Name: {}", id, name);
    }
}
