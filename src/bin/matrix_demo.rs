// Build a small demo pattern and print the packed matrix
use compact_matrix::{CompactMatrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    let mut mat = CompactMatrix::new(5)?;
    mat.all_false();

    // plus-shaped pattern crossing all four quadrants
    mat.switch(2, 0)?;
    mat.switch(2, 1)?;
    mat.switch(0, 2)?;
    mat.switch(1, 2)?;
    mat.switch(2, 2)?;
    mat.switch(3, 2)?;
    mat.switch(4, 2)?;
    mat.set_true(2, 3)?;
    mat.set_true(2, 4)?;

    print!("{}", mat);
    println!(
        "{} logical cells packed into {} storage bytes",
        mat.len(),
        mat.storage_bytes()
    );

    for row in mat.to_rows() {
        println!("{:?}", row);
    }

    Ok(())
}
