use satgate::{config::Config, context::Context};

fn encoded(ctx: &Context) -> Vec<u8> {
    let mut buffer = Vec::new();
    ctx.formula_db
        .write_dimacs(&mut buffer)
        .expect("write to buffer");
    buffer
}

mod encoding {
    use super::*;

    #[test]
    fn exact_bytes() {
        let mut ctx = Context::from_config(Config::new("./solver", 1));

        ctx.add_clause(vec![1, -2]);
        ctx.add_clause(vec![2, 3, -1]);

        assert_eq!(encoded(&ctx), b"p cnf 3 2\n1 -2 0\n2 3 -1 0\n");
    }

    #[test]
    fn deterministic() {
        let mut ctx = Context::from_config(Config::new("./solver", 1));

        ctx.add_clause(vec![7, -8, 9]);
        ctx.add_clause(vec![-9]);

        assert_eq!(encoded(&ctx), encoded(&ctx));
    }

    #[test]
    fn header_tracks_the_database() {
        let mut ctx = Context::from_config(Config::new("./solver", 1));

        assert_eq!(encoded(&ctx), b"p cnf 0 0\n");

        ctx.add_clause(vec![1, -2]);
        assert!(encoded(&ctx).starts_with(b"p cnf 2 1\n"));

        ctx.add_clause(vec![1, -2]);
        assert!(encoded(&ctx).starts_with(b"p cnf 2 2\n"));
    }
}
