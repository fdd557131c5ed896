#![allow(non_snake_case)]
use latexexpr::Utils::logger::init_logger;
use latexexpr::Utils::var_storage::{default_storage_path, load_variables, save_variables};
use latexexpr::prelude::*;
use log::{error, info};
use std::collections::BTreeMap;

fn main() {
    if let Err(e) = init_logger(Some("info"), None) {
        eprintln!("{}", e);
    }
    let example = 0;
    let res = match example {
        0 => basics(),
        1 => beam(),
        2 => storage(),
        _ => Ok(()),
    };
    if let Err(e) = res {
        error!("{}", e);
    }
}

fn basics() -> LatexResult<()> {
    let v1 = Variable::new("H_{ello}", 3.25, "m");
    let v2 = Variable::new("W^{orld}", 5.63, "m");
    let e1 = Expression::new("E_{xample}", &v1 + &v2, "m");
    println!("{}", v1);
    println!("{}", e1);

    let v3 = Variable::new("F", 4.34, "kN").with_exponent(-2);
    println!("{}", v3);

    // value filled in later
    let v8 = Variable::new("F", None, "kN");
    let e2 = Expression::new("R", &v8 * 2, "kN");
    println!("{}", e2);
    v8.set_value(2.34);
    println!("{}", e2);
    println!("{}", e2.to_latex_variable_valunit("Rvalue", "newcommand")?);
    Ok(())
}

fn beam() -> LatexResult<()> {
    // simply supported beam under uniform load
    let q = Variable::new("q", 12.5, r"kN \cdot m^{-1}");
    let l = Variable::new("L", 6.0, "m");
    let m = Expression::new(
        r"M_{\max}",
        div(mul(nodes![&q, (&l).sqr()])?, 8),
        r"kN \cdot m",
    );
    let w = Variable::new("W", 0.000283, "m^3").with_exponent(-6);
    let sigma = Expression::new(r"\sigma", &m / &w, "kPa").with_exponent(3);
    println!("{}", m);
    println!("{}", sigma);
    info!("bending stress {:.1} kPa", sigma.result()?);
    Ok(())
}

fn storage() -> LatexResult<()> {
    let path = default_storage_path();
    let mut vars = BTreeMap::new();
    vars.insert("L".to_string(), Variable::new("L", 6.0, "m"));
    vars.insert("q".to_string(), Variable::new("q", None, r"kN \cdot m^{-1}"));
    save_variables(&path, &vars)?;
    for (key, v) in load_variables(&path)? {
        println!("{}: {}", key, v);
    }
    Ok(())
}
