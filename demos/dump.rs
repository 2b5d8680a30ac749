//! Build a small object graph and scope chain, then dump the globals.
//!
//! Run with: cargo run --example dump

use jsobject::*;

fn main() -> Result<(), CoreError> {
    env_logger::init();

    let arena = new_runtime();
    arena.mutate(|mc, root| {
        let point = new_object(mc, ObjectKind::Ordinary);
        object_put(mc, &point, "x", Value::Number(1.0));
        object_put(mc, &point, "y", Value::Number(2.5));

        env_declare(mc, &root.global_env, "point").borrow_mut(mc).value = Value::Object(point);
        env_declare(mc, &root.global_env, "name").borrow_mut(mc).value = Value::from("demo");

        // Assigning an undeclared variable from an inner scope creates the
        // binding on the global object.
        let inner_vars = new_object(mc, ObjectKind::Ordinary);
        let inner = new_environment(mc, Some(root.global_env), inner_vars);
        env_assign(mc, &inner, "implicit").borrow_mut(mc).value = Value::Boolean(true);
    });

    let mut stdout = std::io::stdout();
    dump_globals(&arena, &mut stdout)?;
    println!("name = {}", read_global(&arena, "name")?);
    Ok(())
}
