use denmat::Matrix;
use rand::Rng;

fn main() {
    let n = 6;
    // build a diagonally dominant matrix: A = R + n*I
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let mut a = Matrix::from_fn(n, n, |i, j| data[i * n + j]).unwrap();
    for i in 0..n {
        a[(i, i)] += n as f64;
    }

    let det = a.determinant().unwrap();
    println!("det(A) = {det}");

    let inv = a.inverse_matrix().unwrap();
    println!("A^-1 =\n{inv}");

    let product = &a * &inv;
    println!("A * A^-1 =\n{product}");
    let ok = product.eq_matrix(&Matrix::identity(n).unwrap());
    println!("round-trip to identity: {ok}");
}
