use bitperm_mask::PermissionSet;

const READ: u64 = 1 << 0;
const WRITE: u64 = 1 << 1;
const EXECUTE: u64 = 1 << 2;
const DELETE: u64 = 1 << 3;

/// Simple example demonstrating basic PermissionSet usage
fn main() {
    // Create permissions for a file
    let file_perms = PermissionSet::new(&[READ, WRITE]);
    println!("File permissions: {:#b}", file_perms.value());

    // Check permissions
    println!("Can read: {}", file_perms.intersects(&READ));
    println!("Can write: {}", file_perms.intersects(&WRITE));
    println!("Can execute: {}", file_perms.intersects(&EXECUTE));

    // Add execute permission
    let updated_perms = file_perms.with(&EXECUTE);
    println!("Updated permissions: {:#b}", updated_perms.value());

    let admin_perms = PermissionSet::new(&[READ, WRITE, EXECUTE, DELETE]);
    println!(
        "File perms is subset of admin: {}",
        updated_perms.is_subset(admin_perms)
    );

    // Remove write permission
    let updated_perms = updated_perms.without(&WRITE);
    println!("After removing write: {:#b}", updated_perms.value());
}
