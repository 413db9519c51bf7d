use std::{collections::VecDeque, panic};

/// Collects the command line arguments, without the program name,
/// as a queue of problem selections.
pub fn get_args() -> VecDeque<String> {
    let mut args = std::env::args();
    args.next();

    args.collect()
}

/// Trait for selecting a calculation to run from a named list.
pub trait ProblemSelector {
    /// Name of the problem group.
    const NAME: &'static str;

    /// All available calculations to choose from.
    fn list() -> Vec<&'static str>;

    /// Runs the calculation with the given number from [`list`](Self::list).
    fn methods(number: &str, args: &mut VecDeque<String>);

    /// Selects a calculation from the arguments or from user input.
    /// With "-1" all calculations are run in order.
    fn select(args: &mut VecDeque<String>) {
        let arg = args.pop_front();

        match arg {
            Some(arg) => {
                if arg == "-1" {
                    select_all(&Self::list(), Self::methods);
                    return;
                }

                Self::methods(&arg, args)
            }
            None => {
                println!();
                println!("[{}] provide a problem number:", Self::NAME);
                println!("-1: run all problems");

                for (i, problem) in Self::list().iter().enumerate() {
                    println!("{}: {}", i, problem);
                }

                let mut input = String::new();
                std::io::stdin().read_line(&mut input).unwrap();
                let input = input.trim();

                if input == "-1" {
                    select_all(&Self::list(), Self::methods);
                    return;
                }

                Self::methods(input, args)
            }
        }

        fn select_all(
            list: &[&'static str],
            methods: impl Fn(&str, &mut VecDeque<String>) + std::panic::RefUnwindSafe,
        ) {
            let args = VecDeque::from(vec!["-1".to_string()]);

            for i in 0..list.len() {
                let result = panic::catch_unwind(|| (methods)(&i.to_string(), &mut args.clone()));

                if result.is_err() {
                    println!("Problem {} failed", i);
                }
            }
        }
    }
}

#[macro_export]
macro_rules! problems_impl {
    ($selector:ty, $name:expr, $($problem_type:expr => $method:expr),* $(,)?) => {
        impl $crate::problem_selector::ProblemSelector for $selector {
            const NAME: &'static str = $name;

            fn list() -> Vec<&'static str> {
                vec![$($problem_type),*]
            }

            #[allow(unused_assignments)]
            fn methods(number: &str, args: &mut std::collections::VecDeque<String>) {
                let name_list = Self::list();

                let mut i: i32 = 0;
                $(
                    if &i.to_string() == number {
                        println!("Chose problem: {}", name_list[i as usize]);
                        $method(args);
                        return;
                    }

                    i += 1;
                )*

                panic!("Not found");
            }
        }
    };
}
