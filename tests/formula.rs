use satgate::{config::Config, context::Context};

fn test_context() -> Context {
    Context::from_config(Config::new("./solver", 1))
}

mod counts {
    use super::*;

    #[test]
    fn atoms_are_distinct_magnitudes() {
        let mut ctx = test_context();

        ctx.add_clause(vec![1, -2]);
        ctx.add_clause(vec![2, 3, -1]);
        ctx.add_clause(vec![-3]);

        assert_eq!(ctx.atom_count(), 3);
        assert_eq!(ctx.clause_count(), 3);
    }

    #[test]
    fn duplicate_clauses_counted_each_time() {
        let mut ctx = test_context();

        ctx.add_clause(vec![1, 2]);
        ctx.add_clause(vec![1, 2]);

        assert_eq!(ctx.clause_count(), 2);
        assert_eq!(ctx.atom_count(), 2);
    }

    #[test]
    fn duplicate_literals_do_not_inflate_atoms() {
        let mut ctx = test_context();

        ctx.add_clause(vec![4, 4, -4]);

        assert_eq!(ctx.atom_count(), 1);
        assert_eq!(ctx.clause_count(), 1);
    }

    #[test]
    fn polarity_is_irrelevant_to_the_atom_set() {
        let mut ctx = test_context();

        ctx.add_clause(vec![-5]);
        ctx.add_clause(vec![5]);

        assert_eq!(ctx.atom_count(), 1);
    }

    #[test]
    fn a_zero_literal_passes_through() {
        let mut ctx = test_context();

        ctx.add_clause(vec![0]);

        assert_eq!(ctx.atom_count(), 1);
        assert_eq!(ctx.clause_count(), 1);
    }

    #[test]
    fn empty_context() {
        let ctx = test_context();

        assert_eq!(ctx.atom_count(), 0);
        assert_eq!(ctx.clause_count(), 0);
        assert!(ctx.model().is_empty());
    }
}

mod append {
    use super::*;

    #[test]
    fn append_formula_matches_repeated_addition() {
        let mut appended = test_context();
        appended.append_formula(vec![vec![1, -2], vec![2, 3, -1], vec![-3]]);

        let mut added = test_context();
        added.add_clause(vec![1, -2]);
        added.add_clause(vec![2, 3, -1]);
        added.add_clause(vec![-3]);

        assert_eq!(appended.atom_count(), added.atom_count());
        assert_eq!(appended.clause_count(), added.clause_count());

        let mut appended_dimacs = Vec::new();
        let mut added_dimacs = Vec::new();
        appended
            .formula_db
            .write_dimacs(&mut appended_dimacs)
            .expect("write to buffer");
        added
            .formula_db
            .write_dimacs(&mut added_dimacs)
            .expect("write to buffer");

        assert_eq!(appended_dimacs, added_dimacs);
    }
}
